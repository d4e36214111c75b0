//! Ensemble Types
//!
//! Per-call ensemble outputs. No logic beyond the agreement figure -
//! these exist only within one scoring call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::registry::ModelKind;

// ============================================================================
// PER-MODEL CONTRIBUTION
// ============================================================================

/// One model's contribution to the blended probability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelContribution {
    pub model_id: String,
    pub kind: ModelKind,
    pub probability: f64,
    pub confidence: f64,
    pub weight: f64,
    /// Named feature contributions reported by the model, explanatory only
    pub explanation: HashMap<String, f64>,
}

/// A model excluded from the blend, with the recorded reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludedModel {
    pub model_id: String,
    pub reason: String,
}

// ============================================================================
// ENSEMBLE OUTCOME
// ============================================================================

/// Blended probability plus the contributing and excluded models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsembleOutcome {
    /// Weighted average of the surviving models' probabilities
    pub probability: f64,
    /// Contributions in active-set order
    pub contributions: Vec<ModelContribution>,
    /// Models excluded by failure, timeout, or contract violation
    pub excluded: Vec<ExcludedModel>,
}

impl EnsembleOutcome {
    pub fn model_count(&self) -> usize {
        self.contributions.len()
    }

    /// Agreement-based confidence: higher model agreement (lower spread of
    /// probabilities) means higher confidence in the blend.
    pub fn agreement_confidence(&self) -> f64 {
        if self.contributions.is_empty() {
            return 0.0;
        }

        let n = self.contributions.len() as f64;
        let mean = self
            .contributions
            .iter()
            .map(|c| c.probability)
            .sum::<f64>()
            / n;
        let variance = self
            .contributions
            .iter()
            .map(|c| (c.probability - mean).powi(2))
            .sum::<f64>()
            / n;

        (1.0 - variance.sqrt()).max(0.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

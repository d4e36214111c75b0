//! Model inference contract
//!
//! The engine does not know whether a model is an in-process classifier or
//! a proxy to a remote model server; it only requires this call shape. The
//! ensemble makes the call awaitable and bounded (blocking pool + timeout)
//! so one slow model cannot stall the others.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Failure of a single model's inference call
#[derive(Debug, Clone)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

// ============================================================================
// MODEL SCORE
// ============================================================================

/// Output of one model for one feature vector. Ephemeral - folded into the
/// ensemble outcome and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelScore {
    /// Fraud probability, strictly within [0, 1]
    pub probability: f64,
    /// Confidence figure (offline accuracy serves as the proxy)
    pub confidence: f64,
    /// Named feature contributions, explanatory only
    pub explanation: HashMap<String, f64>,
}

impl ModelScore {
    /// Enforce the contract: probability must be finite and within [0, 1]
    pub fn validate(&self) -> Result<(), InferenceError> {
        if !self.probability.is_finite() || !(0.0..=1.0).contains(&self.probability) {
            return Err(InferenceError(format!(
                "probability {} outside [0, 1]",
                self.probability
            )));
        }
        if !self.confidence.is_finite() {
            return Err(InferenceError("confidence is not finite".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// FRAUD MODEL TRAIT
// ============================================================================

/// Prediction interface every registered model must satisfy.
///
/// Implementations must be thread-safe: the ensemble evaluates active
/// models concurrently, each on the blocking pool.
pub trait FraudModel: Send + Sync {
    fn infer(&self, features: &FeatureVector) -> Result<ModelScore, InferenceError>;
}

// ============================================================================
// TESTS
// ============================================================================

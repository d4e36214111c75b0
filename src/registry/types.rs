//! Registry Types
//!
//! Model metadata types. No logic here - just data structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// MODEL KIND
// ============================================================================

/// Closed set of supported model kinds.
///
/// New kinds are added by extending this enum, never by string-keyed
/// dispatch - every variant satisfies the same `FraudModel` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Bagged tree-ensemble classifier
    RandomForest,
    /// Boosted tree-ensemble classifier
    GradientBoosting,
    /// Density-based anomaly detector
    IsolationForest,
    /// Feed-forward neural classifier
    NeuralNetwork,
    /// Sequence model over transaction history
    Lstm,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::RandomForest => "random_forest",
            ModelKind::GradientBoosting => "gradient_boosting",
            ModelKind::IsolationForest => "isolation_forest",
            ModelKind::NeuralNetwork => "neural_network",
            ModelKind::Lstm => "lstm",
        }
    }

    /// Anomaly detectors score deviation rather than class membership
    pub fn is_anomaly_detector(&self) -> bool {
        matches!(self, ModelKind::IsolationForest)
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// MODEL DESCRIPTOR
// ============================================================================

/// Registry entry for one scoring model.
///
/// Created at registration, mutated only by activate/deactivate and weight
/// updates, never physically removed - deactivation is a soft delete so the
/// audit trail survives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Unique model identifier within the registry
    pub id: String,
    pub kind: ModelKind,
    pub version: String,
    /// Offline-evaluated metrics from the training run
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub last_trained: NaiveDate,
    /// Whether the model participates in ensemble predictions
    pub is_active: bool,
}

impl ModelDescriptor {
    pub fn new(id: impl Into<String>, kind: ModelKind, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            version: version.into(),
            accuracy: 0.0,
            precision: 0.0,
            recall: 0.0,
            f1_score: 0.0,
            last_trained: NaiveDate::default(),
            is_active: true,
        }
    }

    pub fn with_metrics(mut self, accuracy: f64, precision: f64, recall: f64, f1: f64) -> Self {
        self.accuracy = accuracy;
        self.precision = precision;
        self.recall = recall;
        self.f1_score = f1;
        self
    }

    pub fn with_last_trained(mut self, date: NaiveDate) -> Self {
        self.last_trained = date;
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

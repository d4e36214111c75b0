//! Error handling
//!
//! Typed error taxonomy for the scoring engine. Input and registry-state
//! errors abort the pipeline for that transaction; per-model inference
//! errors are recovered inside the ensemble and recorded in the outcome.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level errors returned to the caller
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Malformed or missing transaction fields, rejected before any model runs
    #[error("invalid input for transaction {transaction_id}: {reason}")]
    InvalidInput {
        transaction_id: String,
        reason: String,
    },

    /// The active set is empty - a result with zero models carries no
    /// statistical meaning, so this is a hard stop for the call
    #[error("no active models available for scoring")]
    NoActiveModels,

    /// A single model failed or returned an out-of-range probability.
    /// Surfaces only when the failure cannot be recovered by the ensemble.
    #[error("model {model_id} inference failed: {reason}")]
    ModelInference { model_id: String, reason: String },

    /// Unknown model id or invalid value in an administrative call
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl EngineError {
    /// Pipeline stage where the error originated, for structured logging
    pub fn stage(&self) -> &'static str {
        match self {
            EngineError::InvalidInput { .. } => "feature_extraction",
            EngineError::NoActiveModels => "ensemble",
            EngineError::ModelInference { .. } => "ensemble",
            EngineError::Configuration(_) => "registry",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidInput {
            transaction_id: "txn_1".to_string(),
            reason: "amount is not finite".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("txn_1"));
        assert!(msg.contains("amount is not finite"));
    }

    #[test]
    fn test_error_stage() {
        assert_eq!(EngineError::NoActiveModels.stage(), "ensemble");
        assert_eq!(
            EngineError::Configuration("bad weight".to_string()).stage(),
            "registry"
        );
    }
}

//! Ensemble Module - Weighted multi-model prediction
//!
//! ## Structure
//! - `types`: EnsembleOutcome, per-model contribution records (no logic)
//! - `predictor`: parallel bounded inference + weighted blending

pub mod predictor;
pub mod types;

// Re-export main types for convenience
pub use predictor::EnsemblePredictor;
pub use types::{EnsembleOutcome, ExcludedModel, ModelContribution};

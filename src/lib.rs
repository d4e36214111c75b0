//! FraudGuard Core - real-time transaction risk scoring engine
//!
//! Turns a transaction's raw attributes into a calibrated fraud
//! probability, a 0-100 risk score, a confidence value, and an actionable
//! recommendation by blending independently-trained classifiers through a
//! weighted ensemble plus a deterministic rule-based adjustment layer.
//!
//! Data flows strictly one way:
//!
//! ```text
//! transaction -> features -> per-model probabilities -> ensemble
//!             -> risk score -> decision
//! ```
//!
//! ## Usage
//! ```ignore
//! use fraudguard_core::{ScoringPipeline, EngineConfig};
//!
//! let pipeline = ScoringPipeline::new(EngineConfig::default());
//! pipeline.register_model(descriptor, model_handle, 1.0)?;
//! let result = pipeline.process(&transaction).await?;
//! ```
//!
//! The pipeline is safe to share behind an `Arc` across a worker pool;
//! the model registry and the throughput counters are the only shared
//! mutable state.

pub mod config;
pub mod ensemble;
pub mod error;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod policy;
pub mod registry;
pub mod scoring;
pub mod transaction;

// Re-export the public surface
pub use config::EngineConfig;
pub use ensemble::{EnsembleOutcome, ExcludedModel, ModelContribution};
pub use error::{EngineError, EngineResult};
pub use features::{FeatureVector, RiskSignals};
pub use model::{FraudModel, InferenceError, ModelScore};
pub use pipeline::{PipelineStatistics, ScoringPipeline, ScoringResult};
pub use policy::{FactorSeverity, Recommendation, RiskFactor, RiskTier};
pub use registry::{ModelDescriptor, ModelKind, ModelRegistry};
pub use transaction::Transaction;

//! Policy Module - Tiering, recommendations, and narrative factors
//!
//! ## Structure
//! - `types`: RiskTier, Recommendation, RiskFactor, PolicyResult (no logic)
//! - `factors`: per-signal narrative factor generation
//! - `engine`: decision precedence

pub mod engine;
pub mod factors;
pub mod types;

// Re-export main types for convenience
pub use engine::{decide, decide_with_config};
pub use factors::analyze_risk_factors;
pub use types::{FactorSeverity, PolicyResult, Recommendation, RiskFactor, RiskTier};

//! Scoring Module - Rule-based risk score composition
//!
//! ## Structure
//! - `rules`: tier thresholds and component weights (constants only)
//! - `calculator`: the fixed weighted formula

pub mod calculator;
pub mod rules;

// Re-export main types for convenience
pub use calculator::{calculate_risk_score, calculate_with_breakdown, ScoreBreakdown};

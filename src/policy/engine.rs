//! Decision Policy
//!
//! Classifies the (risk score, ensemble probability) pair into a tier and
//! a four-way recommendation. Exact precedence:
//!
//!   flagged  = probability >= fraud_threshold OR score >= risk_threshold
//!   !flagged              -> APPROVE
//!   p > 0.8 or score > 90 -> BLOCK
//!   p > 0.6 or score > 75 -> REVIEW
//!   otherwise             -> CHALLENGE
//!
//! CHALLENGE is therefore only reachable for flagged transactions that
//! stay under both BLOCK thresholds.

use crate::config::EngineConfig;
use crate::features::RiskSignals;

use super::factors::analyze_risk_factors;
use super::types::{PolicyResult, Recommendation, RiskTier};

// ============================================================================
// MAIN DECISION FUNCTION
// ============================================================================

/// Policy decision with default thresholds
pub fn decide(risk_score: f64, probability: f64, signals: &RiskSignals) -> PolicyResult {
    decide_with_config(risk_score, probability, signals, &EngineConfig::default())
}

/// Policy decision with custom thresholds
pub fn decide_with_config(
    risk_score: f64,
    probability: f64,
    signals: &RiskSignals,
    config: &EngineConfig,
) -> PolicyResult {
    let tier = RiskTier::from_score(risk_score);

    let is_flagged =
        probability >= config.fraud_threshold || risk_score >= config.risk_score_threshold;

    let recommendation = if !is_flagged {
        Recommendation::Approve
    } else if probability > config.block_probability || risk_score > config.block_score {
        Recommendation::Block
    } else if probability > config.review_probability || risk_score > config.review_score {
        Recommendation::Review
    } else {
        Recommendation::Challenge
    };

    PolicyResult {
        tier,
        recommendation,
        is_flagged,
        factors: analyze_risk_factors(signals),
    }
}

// ============================================================================
// TESTS
// ============================================================================

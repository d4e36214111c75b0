//! Engine Configuration
//!
//! Single source of truth for runtime thresholds. Defaults match the
//! offline calibration; environment variables override them at startup.

use serde::{Deserialize, Serialize};

/// Default fraud-probability threshold for flagging (0-1)
pub const DEFAULT_FRAUD_THRESHOLD: f64 = 0.5;

/// Default risk-score threshold for flagging (0-100)
pub const DEFAULT_RISK_SCORE_THRESHOLD: f64 = 70.0;

/// Default bound on a single model's inference call (milliseconds)
pub const DEFAULT_MODEL_TIMEOUT_MS: u64 = 500;

// ============================================================================
// ENGINE CONFIG
// ============================================================================

/// Runtime configuration for the scoring pipeline and decision policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Probability at or above which a transaction is flagged
    pub fraud_threshold: f64,
    /// Risk score at or above which a transaction is flagged
    pub risk_score_threshold: f64,
    /// Probability above which a flagged transaction is blocked outright
    pub block_probability: f64,
    /// Risk score above which a flagged transaction is blocked outright
    pub block_score: f64,
    /// Probability above which a flagged transaction goes to manual review
    pub review_probability: f64,
    /// Risk score above which a flagged transaction goes to manual review
    pub review_score: f64,
    /// Bound on each model's inference call (milliseconds)
    pub model_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fraud_threshold: DEFAULT_FRAUD_THRESHOLD,
            risk_score_threshold: DEFAULT_RISK_SCORE_THRESHOLD,
            block_probability: 0.8,
            block_score: 90.0,
            review_probability: 0.6,
            review_score: 75.0,
            model_timeout_ms: DEFAULT_MODEL_TIMEOUT_MS,
        }
    }
}

impl EngineConfig {
    /// Strict mode - flags and escalates earlier
    pub fn strict() -> Self {
        Self {
            fraud_threshold: 0.4,
            risk_score_threshold: 60.0,
            block_probability: 0.7,
            block_score: 85.0,
            ..Default::default()
        }
    }

    /// Defaults overridden by environment, for deployments configured
    /// through the process environment
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fraud_threshold: env_f64("FRAUDGUARD_FRAUD_THRESHOLD", defaults.fraud_threshold),
            risk_score_threshold: env_f64(
                "FRAUDGUARD_RISK_SCORE_THRESHOLD",
                defaults.risk_score_threshold,
            ),
            model_timeout_ms: env_u64("FRAUDGUARD_MODEL_TIMEOUT_MS", defaults.model_timeout_ms),
            ..defaults
        }
    }
}

/// Read an f64 from environment or use default
fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Read a u64 from environment or use default
fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.fraud_threshold, 0.5);
        assert_eq!(config.risk_score_threshold, 70.0);
        assert_eq!(config.block_probability, 0.8);
        assert_eq!(config.model_timeout_ms, 500);
    }

    #[test]
    fn test_strict_config() {
        let config = EngineConfig::strict();
        assert!(config.fraud_threshold < EngineConfig::default().fraud_threshold);
        assert!(config.block_score < EngineConfig::default().block_score);
    }
}

//! Policy Types
//!
//! Risk tiers, recommendations, and narrative factors. No decision logic
//! here - just data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK TIER
// ============================================================================

/// Five-level risk tier derived from the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Safe,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskTier {
    /// Tier thresholds: >=80 very-high, >=60 high, >=40 medium, >=20 low
    pub fn from_score(risk_score: f64) -> Self {
        if risk_score >= 80.0 {
            RiskTier::VeryHigh
        } else if risk_score >= 60.0 {
            RiskTier::High
        } else if risk_score >= 40.0 {
            RiskTier::Medium
        } else if risk_score >= 20.0 {
            RiskTier::Low
        } else {
            RiskTier::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Safe => "safe",
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
            RiskTier::VeryHigh => "very_high",
        }
    }

    /// Display color for dashboards
    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Safe => "green",
            RiskTier::Low => "blue",
            RiskTier::Medium => "yellow",
            RiskTier::High => "orange",
            RiskTier::VeryHigh => "red",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RECOMMENDATION
// ============================================================================

/// Actionable recommendation for the serving boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Recommendation {
    /// Let the transaction through
    Approve,
    /// Step-up authentication before proceeding
    Challenge,
    /// Route to a human analyst
    Review,
    /// Reject outright
    Block,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Approve => "APPROVE",
            Recommendation::Challenge => "CHALLENGE",
            Recommendation::Review => "REVIEW",
            Recommendation::Block => "BLOCK",
        }
    }

    pub fn blocks_transaction(&self) -> bool {
        matches!(self, Recommendation::Block)
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// NARRATIVE RISK FACTORS
// ============================================================================

/// Severity of one narrative risk factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorSeverity {
    Low,
    Medium,
    High,
}

impl FactorSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorSeverity::Low => "low",
            FactorSeverity::Medium => "medium",
            FactorSeverity::High => "high",
        }
    }
}

/// One human-readable risk factor. Purely explanatory - factors never
/// feed back into the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub severity: FactorSeverity,
    pub description: String,
}

// ============================================================================
// POLICY RESULT
// ============================================================================

/// Complete policy decision for one transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyResult {
    pub tier: RiskTier,
    pub recommendation: Recommendation,
    pub is_flagged: bool,
    pub factors: Vec<RiskFactor>,
}

// ============================================================================
// TESTS
// ============================================================================

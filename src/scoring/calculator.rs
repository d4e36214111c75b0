//! Risk Score Calculator
//!
//! Maps the ensemble probability plus the rule-based signals into one
//! 0-100 composite score:
//!
//!   base       = ensemble_probability × 100
//!   risk_score = clamp(base×0.5 + amount×0.2 + location×0.2 + time×0.1, 0, 100)
//!
//! The ensemble carries half the score because it is the calibrated
//! component; the rule factors catch patterns the models cannot see per
//! transaction (tiered amounts, off-hours, risky counterpart locations).

use serde::{Deserialize, Serialize};

use crate::features::extractor::is_suspicious_location;
use crate::features::RiskSignals;

use super::rules::*;

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// Breakdown of how the composite score was assembled, for audit logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub amount_risk: f64,
    pub location_risk: f64,
    pub time_risk: f64,
    pub risk_score: f64,
}

// ============================================================================
// CALCULATION
// ============================================================================

/// Composite 0-100 risk score for one transaction
pub fn calculate_risk_score(ensemble_probability: f64, signals: &RiskSignals) -> f64 {
    calculate_with_breakdown(ensemble_probability, signals).risk_score
}

/// Composite score with the per-component breakdown
pub fn calculate_with_breakdown(
    ensemble_probability: f64,
    signals: &RiskSignals,
) -> ScoreBreakdown {
    let base = ensemble_probability * 100.0;
    let amount_risk = assess_amount_risk(signals.amount);
    let location_risk = assess_location_risk(signals.location_risk);
    let time_risk = assess_time_risk(signals.hour);

    let risk_score = (base * BASE_WEIGHT
        + amount_risk * AMOUNT_WEIGHT
        + location_risk * LOCATION_WEIGHT
        + time_risk * TIME_WEIGHT)
        .clamp(0.0, 100.0);

    ScoreBreakdown {
        base,
        amount_risk,
        location_risk,
        time_risk,
        risk_score,
    }
}

/// Tiered step function over the transaction amount
fn assess_amount_risk(amount: f64) -> f64 {
    if amount > AMOUNT_TIER_HIGH {
        AMOUNT_RISK_HIGH
    } else if amount > AMOUNT_TIER_MEDIUM {
        AMOUNT_RISK_MEDIUM
    } else if amount > AMOUNT_TIER_LOW {
        AMOUNT_RISK_LOW
    } else {
        AMOUNT_RISK_BASELINE
    }
}

fn assess_location_risk(location_risk: f64) -> f64 {
    if is_suspicious_location(location_risk) {
        LOCATION_RISK_SUSPICIOUS
    } else {
        LOCATION_RISK_BASELINE
    }
}

fn assess_time_risk(hour: u32) -> f64 {
    if hour < QUIET_HOURS_END || hour >= QUIET_HOURS_START {
        TIME_RISK_NIGHT
    } else {
        TIME_RISK_BASELINE
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(amount: f64, balance: f64, hour: u32, location_risk: f64) -> RiskSignals {
        RiskSignals {
            amount,
            balance,
            hour,
            amount_to_balance_ratio: amount / (balance + 1.0),
            is_high_amount: amount > 10_000.0,
            is_night_transaction: hour < 6 || hour > 22,
            is_weekend: false,
            location_risk,
            device_trust: 0.9,
        }
    }

    #[test]
    fn test_suspicious_scenario_scores_very_high() {
        // amount=75000, hour=3, suspicious location, ensemble 0.85
        let breakdown = calculate_with_breakdown(0.85, &signals(75_000.0, 5_000.0, 3, 0.9));
        assert_eq!(breakdown.amount_risk, 80.0);
        assert_eq!(breakdown.location_risk, 80.0);
        assert_eq!(breakdown.time_risk, 70.0);
        // 42.5 + 16 + 16 + 7 = 81.5
        assert!((breakdown.risk_score - 81.5).abs() < 1e-9);
        assert!(breakdown.risk_score >= 80.0);
    }

    #[test]
    fn test_benign_scenario_scores_low() {
        // amount=500, hour=14, known location, ensemble 0.05
        let score = calculate_risk_score(0.05, &signals(500.0, 25_000.0, 14, 0.1));
        // 2.5 + 2 + 4 + 1.5 = 10
        assert!((score - 10.0).abs() < 1e-9);
        assert!(score < 20.0);
    }

    #[test]
    fn test_score_bounded_at_extremes() {
        // Boundary: amount=1e9, balance=0.01, probability=1.0
        let score = calculate_risk_score(1.0, &signals(1e9, 0.01, 3, 0.9));
        assert!(score <= 100.0);
        assert!(score >= 0.0);

        let floor = calculate_risk_score(0.0, &signals(1.0, 1e9, 12, 0.0));
        assert!(floor >= 0.0);
    }

    #[test]
    fn test_amount_tiers() {
        let base = |amount| calculate_with_breakdown(0.0, &signals(amount, 1e6, 12, 0.1));
        assert_eq!(base(500.0).amount_risk, 10.0);
        assert_eq!(base(1_500.0).amount_risk, 30.0);
        assert_eq!(base(7_500.0).amount_risk, 60.0);
        assert_eq!(base(20_000.0).amount_risk, 80.0);
    }

    #[test]
    fn test_quiet_hours_window() {
        let at = |hour| calculate_with_breakdown(0.0, &signals(100.0, 1_000.0, hour, 0.1));
        assert_eq!(at(3).time_risk, TIME_RISK_NIGHT);
        assert_eq!(at(23).time_risk, TIME_RISK_NIGHT);
        assert_eq!(at(6).time_risk, TIME_RISK_BASELINE);
        assert_eq!(at(22).time_risk, TIME_RISK_BASELINE);
    }

    #[test]
    fn test_score_monotone_in_probability() {
        let s = signals(2_000.0, 10_000.0, 12, 0.1);
        let mut last = -1.0;
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let score = calculate_risk_score(p, &s);
            assert!(score > last);
            last = score;
        }
    }
}

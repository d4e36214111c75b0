//! Narrative Risk Factors
//!
//! Human-readable explanations generated independently per signal, each
//! with its own severity thresholds. Explanatory only - the score is
//! already final when these are produced.

use crate::features::extractor::is_suspicious_location;
use crate::features::RiskSignals;

use super::types::{FactorSeverity, RiskFactor};

/// Very large amounts get their own factor regardless of the ratio
const VERY_LARGE_AMOUNT: f64 = 50_000.0;

/// Generate the narrative factors for one transaction's signals
pub fn analyze_risk_factors(signals: &RiskSignals) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    // Amount-to-balance ratio. Skipped entirely at zero balance: an
    // undefined ratio on a brand-new account is not treated as maximal
    // risk.
    if signals.balance > 0.0 {
        let ratio = signals.amount / signals.balance;
        if ratio > 1.5 {
            factors.push(RiskFactor {
                factor: "amount_to_balance_ratio".to_string(),
                severity: FactorSeverity::High,
                description: format!(
                    "Amount ({:.2}) greatly exceeds account balance ({:.2})",
                    signals.amount, signals.balance
                ),
            });
        } else if ratio > 0.7 {
            factors.push(RiskFactor {
                factor: "amount_to_balance_ratio".to_string(),
                severity: FactorSeverity::Medium,
                description: format!(
                    "Amount ({:.2}) is large relative to account balance ({:.2})",
                    signals.amount, signals.balance
                ),
            });
        }
    }

    // Time of day
    if signals.is_night_transaction {
        factors.push(RiskFactor {
            factor: "transaction_time".to_string(),
            severity: FactorSeverity::Medium,
            description: format!("Transaction at unusual hour ({:02}:00)", signals.hour),
        });
    }

    // Location
    if is_suspicious_location(signals.location_risk) {
        factors.push(RiskFactor {
            factor: "location".to_string(),
            severity: FactorSeverity::High,
            description: "High-risk counterpart location".to_string(),
        });
    } else if signals.location_risk > 0.4 {
        factors.push(RiskFactor {
            factor: "location".to_string(),
            severity: FactorSeverity::Medium,
            description: "Medium-risk counterpart location".to_string(),
        });
    }

    // Device trust
    if signals.device_trust < 0.4 {
        factors.push(RiskFactor {
            factor: "device_trust".to_string(),
            severity: FactorSeverity::High,
            description: "Untrusted or unrecognized device".to_string(),
        });
    } else if signals.device_trust < 0.6 {
        factors.push(RiskFactor {
            factor: "device_trust".to_string(),
            severity: FactorSeverity::Medium,
            description: "Device with low trust score".to_string(),
        });
    }

    // Very large amount
    if signals.amount > VERY_LARGE_AMOUNT {
        factors.push(RiskFactor {
            factor: "transaction_amount".to_string(),
            severity: FactorSeverity::Medium,
            description: format!("Very large amount ({:.2})", signals.amount),
        });
    }

    factors
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn signals() -> RiskSignals {
        RiskSignals {
            amount: 500.0,
            balance: 25_000.0,
            hour: 14,
            amount_to_balance_ratio: 500.0 / 25_001.0,
            is_high_amount: false,
            is_night_transaction: false,
            is_weekend: false,
            location_risk: 0.1,
            device_trust: 0.9,
        }
    }

    fn factor_names(factors: &[RiskFactor]) -> Vec<&str> {
        factors.iter().map(|f| f.factor.as_str()).collect()
    }

    #[test]
    fn test_benign_signals_produce_no_factors() {
        assert!(analyze_risk_factors(&signals()).is_empty());
    }

    #[test]
    fn test_ratio_severities() {
        let mut s = signals();
        s.amount = 20_000.0; // ratio 0.8
        let factors = analyze_risk_factors(&s);
        assert_eq!(factors[0].severity, FactorSeverity::Medium);

        s.amount = 40_000.0; // ratio 1.6
        let factors = analyze_risk_factors(&s);
        assert_eq!(factors[0].severity, FactorSeverity::High);
    }

    #[test]
    fn test_zero_balance_skips_ratio_factor() {
        let mut s = signals();
        s.balance = 0.0;
        s.amount = 40_000.0;
        let factors = analyze_risk_factors(&s);
        assert!(!factor_names(&factors).contains(&"amount_to_balance_ratio"));
    }

    #[test]
    fn test_night_factor() {
        let mut s = signals();
        s.hour = 3;
        s.is_night_transaction = true;
        let factors = analyze_risk_factors(&s);
        assert!(factor_names(&factors).contains(&"transaction_time"));
    }

    #[test]
    fn test_location_factor() {
        let mut s = signals();
        s.location_risk = 0.9;
        let factors = analyze_risk_factors(&s);
        let location = factors.iter().find(|f| f.factor == "location").unwrap();
        assert_eq!(location.severity, FactorSeverity::High);
    }

    #[test]
    fn test_device_trust_factor() {
        let mut s = signals();
        s.device_trust = 0.2;
        let factors = analyze_risk_factors(&s);
        let device = factors.iter().find(|f| f.factor == "device_trust").unwrap();
        assert_eq!(device.severity, FactorSeverity::High);

        s.device_trust = 0.5;
        let factors = analyze_risk_factors(&s);
        let device = factors.iter().find(|f| f.factor == "device_trust").unwrap();
        assert_eq!(device.severity, FactorSeverity::Medium);
    }

    #[test]
    fn test_suspicious_transaction_collects_multiple_factors() {
        let s = RiskSignals {
            amount: 75_000.0,
            balance: 5_000.0,
            hour: 3,
            amount_to_balance_ratio: 75_000.0 / 5_001.0,
            is_high_amount: true,
            is_night_transaction: true,
            is_weekend: true,
            location_risk: 0.9,
            device_trust: 0.2,
        };
        let names = analyze_risk_factors(&s);
        let names = factor_names(&names);
        assert!(names.contains(&"amount_to_balance_ratio"));
        assert!(names.contains(&"transaction_time"));
        assert!(names.contains(&"location"));
        assert!(names.contains(&"device_trust"));
        assert!(names.contains(&"transaction_amount"));
    }
}

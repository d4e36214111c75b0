//! Feature Extractor
//!
//! Converts a validated transaction into the fixed-arity feature vector
//! plus the named risk signals consumed by the rule-based scoring layer.
//! Leaf component - no dependency on the registry or the models.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::transaction::Transaction;

use super::encoding::{encode_payment_method, encode_transaction_type};
use super::vector::FeatureVector;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Amount above which a transaction is flagged as high-amount
pub const HIGH_AMOUNT_THRESHOLD: f64 = 10_000.0;

/// Night window: before 06:00 or after 22:00
pub const NIGHT_START_HOUR: u32 = 22;
pub const NIGHT_END_HOUR: u32 = 6;

/// Location substrings that mark a counterpart location as high risk
const SUSPICIOUS_LOCATION_KEYWORDS: &[&str] = &[
    "unknown",
    "anonymous",
    "proxy",
    "vpn",
    "offshore",
    "high-risk",
];

// ============================================================================
// RISK SIGNALS
// ============================================================================

/// Human-readable risk signals extracted alongside the feature vector.
///
/// These feed the rule-based score adjustment and the narrative risk
/// factors; the models only ever see the numeric vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSignals {
    pub amount: f64,
    pub balance: f64,
    pub hour: u32,
    /// amount / (balance + 1); the +1 keeps the ratio defined at zero balance
    pub amount_to_balance_ratio: f64,
    pub is_high_amount: bool,
    pub is_night_transaction: bool,
    pub is_weekend: bool,
    /// Location risk in [0, 1], from the suspicious-keyword set
    pub location_risk: f64,
    /// Device trust in [0, 1], from the fingerprint
    pub device_trust: f64,
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extract the feature vector and risk signals for one transaction.
///
/// Validates required fields first; never substitutes a default for a
/// missing or non-numeric required field.
pub fn extract(transaction: &Transaction) -> EngineResult<(FeatureVector, RiskSignals)> {
    transaction.validate()?;

    let hour = transaction.hour();
    let ratio = transaction.amount / (transaction.balance + 1.0);
    let is_high_amount = transaction.amount > HIGH_AMOUNT_THRESHOLD;
    let is_night = hour < NIGHT_END_HOUR || hour > NIGHT_START_HOUR;
    let is_weekend = transaction.is_weekend();
    let location_risk = assess_location_risk(&transaction.location);
    let device_trust = assess_device_trust(&transaction.device_fingerprint);

    let mut vector = FeatureVector::new();
    vector.set_by_name("amount", transaction.amount);
    vector.set_by_name("balance", transaction.balance);
    vector.set_by_name("customer_age", transaction.customer_age as f64);
    vector.set_by_name("hour", hour as f64);
    vector.set_by_name("day_of_week", transaction.day_of_week() as f64);
    vector.set_by_name("location_risk", location_risk);
    vector.set_by_name("device_trust", device_trust);
    vector.set_by_name("amount_to_balance_ratio", ratio);
    vector.set_by_name("is_high_amount", if is_high_amount { 1.0 } else { 0.0 });
    vector.set_by_name("is_night_transaction", if is_night { 1.0 } else { 0.0 });
    vector.set_by_name("is_weekend", if is_weekend { 1.0 } else { 0.0 });
    vector.set_by_name(
        "transaction_type_encoded",
        encode_transaction_type(&transaction.transaction_type),
    );
    vector.set_by_name(
        "payment_method_encoded",
        encode_payment_method(&transaction.payment_method),
    );

    let signals = RiskSignals {
        amount: transaction.amount,
        balance: transaction.balance,
        hour,
        amount_to_balance_ratio: ratio,
        is_high_amount,
        is_night_transaction: is_night,
        is_weekend,
        location_risk,
        device_trust,
    };

    log::debug!(
        "Extracted features for {}: ratio={:.4}, night={}, location_risk={:.2}",
        transaction.id,
        ratio,
        is_night,
        location_risk
    );

    Ok((vector, signals))
}

/// Location risk from the suspicious-keyword set
fn assess_location_risk(location: &str) -> f64 {
    let lowered = location.to_lowercase();
    if location.trim().is_empty() {
        return 0.7;
    }
    if SUSPICIOUS_LOCATION_KEYWORDS
        .iter()
        .any(|kw| lowered.contains(kw))
    {
        0.9
    } else {
        0.1
    }
}

/// Device trust from the fingerprint. Absent or stub fingerprints come
/// from unenrolled devices and score low.
fn assess_device_trust(fingerprint: &str) -> f64 {
    let trimmed = fingerprint.trim();
    if trimmed.is_empty() {
        0.1
    } else if trimmed.len() < 8 {
        0.4
    } else {
        0.9
    }
}

/// True when the location matches the suspicious-keyword set
pub fn is_suspicious_location(location_risk: f64) -> bool {
    location_risk > 0.6
}

// ============================================================================
// TESTS
// ============================================================================

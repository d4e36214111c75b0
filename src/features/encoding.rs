//! Categorical Encoding
//!
//! Stable integer codes for transaction type and payment method, fitted
//! offline alongside the models. The tables must never change between
//! scoring calls; an unseen category maps to the reserved UNKNOWN_CODE
//! instead of failing the transaction.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Reserved code for categories not present in the fitted table
pub const UNKNOWN_CODE: f64 = -1.0;

/// Transaction type codes, fixed at training time
static TRANSACTION_TYPE_CODES: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("purchase", 0),
        ("domestic_transfer", 1),
        ("bill_payment", 2),
        ("international_transfer", 3),
        ("cash_withdrawal", 4),
    ])
});

/// Payment method codes, fixed at training time
static PAYMENT_METHOD_CODES: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("credit_card", 0),
        ("debit_card", 1),
        ("bank_transfer", 2),
        ("cash", 3),
        ("digital_wallet", 4),
    ])
});

/// Encode a transaction type category
pub fn encode_transaction_type(category: &str) -> f64 {
    encode(&TRANSACTION_TYPE_CODES, category)
}

/// Encode a payment method category
pub fn encode_payment_method(category: &str) -> f64 {
    encode(&PAYMENT_METHOD_CODES, category)
}

fn encode(table: &HashMap<&'static str, i32>, category: &str) -> f64 {
    match table.get(category.trim().to_ascii_lowercase().as_str()) {
        Some(code) => *code as f64,
        None => {
            log::debug!("Unseen category '{}', using unknown code", category);
            UNKNOWN_CODE
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

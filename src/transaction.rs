//! Transaction input record
//!
//! Immutable per-request input. Created by the caller, never mutated,
//! discarded after scoring - the engine keeps no copy.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

// ============================================================================
// TRANSACTION
// ============================================================================

/// Raw transaction attributes as received from the serving boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Caller-assigned transaction identifier
    pub id: String,
    /// Monetary amount in currency units
    pub amount: f64,
    /// Account balance at transaction time
    pub balance: f64,
    /// Counterpart location string (free text)
    pub location: String,
    /// Device fingerprint of the originating device
    pub device_fingerprint: String,
    /// Payment method category (e.g. "credit_card")
    pub payment_method: String,
    /// Customer age in years
    pub customer_age: u32,
    /// Transaction type category (e.g. "international_transfer")
    pub transaction_type: String,
    /// Transaction timestamp (UTC)
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Hour of day (0-23) extracted from the timestamp
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Day of week as 0 (Monday) through 6 (Sunday)
    pub fn day_of_week(&self) -> u32 {
        self.timestamp.weekday().num_days_from_monday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.timestamp.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Reject malformed input before any model is invoked.
    ///
    /// Required numeric fields must be present and finite - the engine
    /// never substitutes a default for a required field.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.amount.is_finite() {
            return Err(self.invalid("amount is not a finite number"));
        }
        if self.amount <= 0.0 {
            return Err(self.invalid("amount must be positive"));
        }
        if !self.balance.is_finite() {
            return Err(self.invalid("balance is not a finite number"));
        }
        if self.balance < 0.0 {
            return Err(self.invalid("balance must not be negative"));
        }
        if self.customer_age == 0 {
            return Err(self.invalid("customer_age is missing"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> EngineError {
        EngineError::InvalidInput {
            transaction_id: self.id.clone(),
            reason: reason.to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_transaction() -> Transaction {
        Transaction {
            id: "txn_test".to_string(),
            amount: 500.0,
            balance: 25_000.0,
            location: "known-city".to_string(),
            device_fingerprint: "device_abc123".to_string(),
            payment_method: "credit_card".to_string(),
            customer_age: 35,
            transaction_type: "purchase".to_string(),
            // Wednesday 14:00 UTC
            timestamp: Utc.with_ymd_and_hms(2024, 1, 17, 14, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_valid_transaction() {
        assert!(base_transaction().validate().is_ok());
    }

    #[test]
    fn test_rejects_nan_amount() {
        let mut tx = base_transaction();
        tx.amount = f64::NAN;
        let err = tx.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_infinite_balance() {
        let mut tx = base_transaction();
        tx.balance = f64::INFINITY;
        assert!(tx.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_amount() {
        let mut tx = base_transaction();
        tx.amount = -10.0;
        assert!(tx.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_age() {
        let mut tx = base_transaction();
        tx.customer_age = 0;
        assert!(tx.validate().is_err());
    }

    #[test]
    fn test_zero_balance_is_valid() {
        // Brand-new accounts are legitimate input
        let mut tx = base_transaction();
        tx.balance = 0.0;
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_calendar_derivations() {
        let tx = base_transaction();
        assert_eq!(tx.hour(), 14);
        assert_eq!(tx.day_of_week(), 2); // Wednesday
        assert!(!tx.is_weekend());

        let mut weekend = base_transaction();
        weekend.timestamp = Utc.with_ymd_and_hms(2024, 1, 20, 3, 0, 0).unwrap();
        assert!(weekend.is_weekend());
        assert_eq!(weekend.hour(), 3);
    }
}

//! Feature Normalization
//!
//! Z-score scaling with statistics fixed at training time. The same
//! statistics are reused for every scoring call - the scaler is never
//! refit inside the scoring path, otherwise model inputs would drift
//! away from the distribution the models were trained on.

use serde::{Deserialize, Serialize};

use super::layout::{LayoutMismatchError, FEATURE_COUNT};
use super::vector::FeatureVector;

// ============================================================================
// TRAINING-TIME STATISTICS
// ============================================================================

/// Per-feature means from the offline training run (layout order)
const TRAINED_MEANS: [f64; FEATURE_COUNT] = [
    9_500.0,   // amount
    45_000.0,  // balance
    41.0,      // customer_age
    14.2,      // hour
    3.0,       // day_of_week
    0.31,      // location_risk
    0.72,      // device_trust
    0.85,      // amount_to_balance_ratio
    0.18,      // is_high_amount
    0.21,      // is_night_transaction
    0.28,      // is_weekend
    2.1,       // transaction_type_encoded
    1.9,       // payment_method_encoded
];

/// Per-feature standard deviations from the offline training run
const TRAINED_STD_DEVS: [f64; FEATURE_COUNT] = [
    16_000.0,  // amount
    31_000.0,  // balance
    12.5,      // customer_age
    5.6,       // hour
    2.0,       // day_of_week
    0.27,      // location_risk
    0.26,      // device_trust
    2.4,       // amount_to_balance_ratio
    0.38,      // is_high_amount
    0.41,      // is_night_transaction
    0.45,      // is_weekend
    1.6,       // transaction_type_encoded
    1.4,       // payment_method_encoded
];

// ============================================================================
// SCALER
// ============================================================================

/// Standard scaler (zero mean, unit variance) with frozen statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub means: [f64; FEATURE_COUNT],
    pub std_devs: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Scaler parameterized by the shipped training-time statistics
    pub fn trained() -> Self {
        Self {
            means: TRAINED_MEANS,
            std_devs: TRAINED_STD_DEVS,
        }
    }

    /// Normalize a feature vector using the frozen statistics.
    ///
    /// Rejects vectors built against a different layout version.
    pub fn normalize(&self, vector: &FeatureVector) -> Result<FeatureVector, LayoutMismatchError> {
        vector.validate()?;

        let mut values = [0.0f64; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            let std = if self.std_devs[i] > 1e-8 {
                self.std_devs[i]
            } else {
                1.0
            };
            values[i] = (vector.values[i] - self.means[i]) / std;
        }

        Ok(FeatureVector::from_values(values))
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::trained()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_centers_at_mean() {
        let scaler = StandardScaler::trained();
        let vector = FeatureVector::from_values(TRAINED_MEANS);

        let normalized = scaler.normalize(&vector).unwrap();
        for value in normalized.values {
            assert!(value.abs() < 1e-9);
        }
    }

    #[test]
    fn test_normalize_unit_deviation() {
        let scaler = StandardScaler::trained();
        let mut raw = TRAINED_MEANS;
        raw[0] += TRAINED_STD_DEVS[0]; // amount one std above mean

        let normalized = scaler.normalize(&FeatureVector::from_values(raw)).unwrap();
        assert!((normalized.values[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        // Fixed statistics: the same vector normalizes identically every time
        let scaler = StandardScaler::trained();
        let mut raw = [0.0; FEATURE_COUNT];
        raw[0] = 75_000.0;
        raw[1] = 5_000.0;
        let vector = FeatureVector::from_values(raw);

        let first = scaler.normalize(&vector).unwrap();
        let second = scaler.normalize(&vector).unwrap();
        assert_eq!(first.values, second.values);
    }

    #[test]
    fn test_normalize_rejects_layout_mismatch() {
        let scaler = StandardScaler::trained();
        let mut stale = FeatureVector::new();
        stale.layout_hash ^= 1;
        assert!(scaler.normalize(&stale).is_err());
    }

    #[test]
    fn test_zero_std_guard() {
        let mut scaler = StandardScaler::trained();
        scaler.std_devs[3] = 0.0;
        let vector = FeatureVector::new();
        // Must not divide by zero
        let normalized = scaler.normalize(&vector).unwrap();
        assert!(normalized.values[3].is_finite());
    }
}

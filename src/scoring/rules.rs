//! Risk Scoring Rules & Weights
//!
//! Constants for the composite risk score. No scoring logic here.

// ============================================================================
// COMPONENT WEIGHTS (must sum to 1.0)
// ============================================================================

/// Weight of the ensemble probability (50%)
pub const BASE_WEIGHT: f64 = 0.5;

/// Weight of the amount tier (20%)
pub const AMOUNT_WEIGHT: f64 = 0.2;

/// Weight of the location factor (20%)
pub const LOCATION_WEIGHT: f64 = 0.2;

/// Weight of the time-of-day factor (10%)
pub const TIME_WEIGHT: f64 = 0.1;

// ============================================================================
// AMOUNT TIERS
// ============================================================================

pub const AMOUNT_TIER_HIGH: f64 = 10_000.0;
pub const AMOUNT_TIER_MEDIUM: f64 = 5_000.0;
pub const AMOUNT_TIER_LOW: f64 = 1_000.0;

pub const AMOUNT_RISK_HIGH: f64 = 80.0;
pub const AMOUNT_RISK_MEDIUM: f64 = 60.0;
pub const AMOUNT_RISK_LOW: f64 = 30.0;
pub const AMOUNT_RISK_BASELINE: f64 = 10.0;

// ============================================================================
// LOCATION
// ============================================================================

/// Risk points for a location matching the suspicious-keyword set
pub const LOCATION_RISK_SUSPICIOUS: f64 = 80.0;

/// Baseline risk points for any other location
pub const LOCATION_RISK_BASELINE: f64 = 20.0;

// ============================================================================
// TIME OF DAY
// ============================================================================

/// Off-hours window: before 06:00 or from 23:00
pub const QUIET_HOURS_START: u32 = 23;
pub const QUIET_HOURS_END: u32 = 6;

/// Risk points for a transaction inside the off-hours window
pub const TIME_RISK_NIGHT: f64 = 70.0;

/// Baseline risk points during normal hours
pub const TIME_RISK_BASELINE: f64 = 15.0;

//! Features Module - Feature Extraction Engine
//!
//! Turns a raw transaction into the fixed-arity numeric vector the models
//! consume, plus the named risk signals the rule layer consumes.
//!
//! ## Structure
//! - `layout`: versioned feature schema (single source of truth)
//! - `vector`: versioned FeatureVector with layout validation
//! - `encoding`: stable categorical codes, fitted offline
//! - `scaler`: z-score normalization with frozen statistics
//! - `extractor`: transaction -> (FeatureVector, RiskSignals)

pub mod encoding;
pub mod extractor;
pub mod layout;
pub mod scaler;
pub mod vector;

// Re-export common types
pub use extractor::{extract, RiskSignals, HIGH_AMOUNT_THRESHOLD};
pub use layout::{layout_hash, LayoutInfo, LayoutMismatchError, FEATURE_COUNT, FEATURE_VERSION};
pub use scaler::StandardScaler;
pub use vector::FeatureVector;

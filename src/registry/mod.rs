//! Registry Module - Model metadata and blending weights
//!
//! ## Structure
//! - `types`: ModelKind, ModelDescriptor (no logic)
//! - `store`: lock-guarded ModelRegistry with snapshot reads

pub mod store;
pub mod types;

// Re-export main types for convenience
pub use store::{ActiveModel, ModelRegistry};
pub use types::{ModelDescriptor, ModelKind};

//! Model Registry
//!
//! The only long-lived, process-wide mutable state in the engine. One
//! RwLock guards the whole map plus the active list, so a scoring call
//! snapshots either the pre- or post-update registry state - never a mix
//! of old weights with a newly-added model.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::features::LayoutInfo;
use crate::model::FraudModel;

use super::types::ModelDescriptor;

// ============================================================================
// ENTRIES AND SNAPSHOTS
// ============================================================================

struct ModelEntry {
    descriptor: ModelDescriptor,
    weight: f64,
    handle: Arc<dyn FraudModel>,
}

/// One active model as captured by a consistent registry snapshot
#[derive(Clone)]
pub struct ActiveModel {
    pub descriptor: ModelDescriptor,
    pub weight: f64,
    pub handle: Arc<dyn FraudModel>,
}

struct RegistryInner {
    models: HashMap<String, ModelEntry>,
    /// Active ids in registration order; always a subset of `models` keys
    active: Vec<String>,
}

// ============================================================================
// MODEL REGISTRY
// ============================================================================

/// Thread-safe registry of scoring models and their blending weights.
///
/// Reads (the per-transaction path) proceed in parallel; writes are
/// mutually exclusive with each other and with in-flight snapshots.
pub struct ModelRegistry {
    inner: RwLock<RegistryInner>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        log::info!("Model registry initialized");
        Self {
            inner: RwLock::new(RegistryInner {
                models: HashMap::new(),
                active: Vec::new(),
            }),
        }
    }

    /// Add or replace a model entry. Newly registered active models join
    /// the active set; weight must be a non-negative finite number.
    pub fn register(
        &self,
        descriptor: ModelDescriptor,
        handle: Arc<dyn FraudModel>,
        weight: f64,
    ) -> EngineResult<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(EngineError::Configuration(format!(
                "weight {} for model {} must be non-negative",
                weight, descriptor.id
            )));
        }

        let mut inner = self.inner.write();
        let id = descriptor.id.clone();
        let active = descriptor.is_active;

        let replaced = inner
            .models
            .insert(
                id.clone(),
                ModelEntry {
                    descriptor,
                    weight,
                    handle,
                },
            )
            .is_some();

        // Re-registration must not duplicate the active entry
        inner.active.retain(|m| m != &id);
        if active {
            inner.active.push(id.clone());
        }

        log::info!(
            "Model {} {} with weight {}",
            id,
            if replaced { "replaced" } else { "registered" },
            weight
        );
        Ok(())
    }

    /// Activate a model. Idempotent; unknown ids are a configuration error.
    pub fn activate(&self, id: &str) -> EngineResult<()> {
        let mut inner = self.inner.write();
        {
            let entry = inner.models.get_mut(id).ok_or_else(|| {
                EngineError::Configuration(format!("cannot activate unknown model {}", id))
            })?;
            entry.descriptor.is_active = true;
        }

        if !inner.active.iter().any(|m| m == id) {
            inner.active.push(id.to_string());
            log::info!("Model {} activated", id);
        }
        Ok(())
    }

    /// Deactivate a model. Idempotent soft-delete: the id leaves the active
    /// set but the metadata stays for auditability.
    pub fn deactivate(&self, id: &str) -> EngineResult<()> {
        let mut inner = self.inner.write();
        {
            let entry = inner.models.get_mut(id).ok_or_else(|| {
                EngineError::Configuration(format!("cannot deactivate unknown model {}", id))
            })?;
            entry.descriptor.is_active = false;
        }

        if inner.active.iter().any(|m| m == id) {
            inner.active.retain(|m| m != id);
            log::info!("Model {} deactivated", id);
        }
        Ok(())
    }

    /// Apply blending weights for known ids. Unknown ids and invalid values
    /// are reported back as warnings, never as a fatal error.
    pub fn update_weights(&self, weights: &HashMap<String, f64>) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut inner = self.inner.write();

        for (id, weight) in weights {
            match inner.models.get_mut(id) {
                Some(entry) if weight.is_finite() && *weight >= 0.0 => {
                    entry.weight = *weight;
                    log::info!("Updated weight for model {} to {}", id, weight);
                }
                Some(_) => {
                    let warning = format!("ignored invalid weight {} for model {}", weight, id);
                    log::warn!("{}", warning);
                    warnings.push(warning);
                }
                None => {
                    let warning = format!("model {} not found", id);
                    log::warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        warnings
    }

    /// Descriptors of all active models, in registration order
    pub fn list_active(&self) -> Vec<ModelDescriptor> {
        let inner = self.inner.read();
        inner
            .active
            .iter()
            .filter_map(|id| inner.models.get(id))
            .map(|entry| entry.descriptor.clone())
            .collect()
    }

    /// Consistent snapshot of the active set: descriptors, weights, and
    /// model handles captured under a single read guard.
    pub fn active_snapshot(&self) -> Vec<ActiveModel> {
        let inner = self.inner.read();
        inner
            .active
            .iter()
            .filter_map(|id| inner.models.get(id))
            .map(|entry| ActiveModel {
                descriptor: entry.descriptor.clone(),
                weight: entry.weight,
                handle: Arc::clone(&entry.handle),
            })
            .collect()
    }

    /// Descriptor lookup by id (active or not)
    pub fn get(&self, id: &str) -> Option<ModelDescriptor> {
        self.inner.read().models.get(id).map(|e| e.descriptor.clone())
    }

    /// Number of registered models, active or not
    pub fn len(&self) -> usize {
        self.inner.read().models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().models.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.inner.read().active.len()
    }

    /// Export the full registry state (metadata, weights, active list) plus
    /// the feature layout the models were registered against, for
    /// administrative inspection
    pub fn export_configuration(&self) -> serde_json::Value {
        let inner = self.inner.read();
        let models: serde_json::Map<String, serde_json::Value> = inner
            .models
            .iter()
            .map(|(id, entry)| {
                (
                    id.clone(),
                    serde_json::json!({
                        "metadata": entry.descriptor,
                        "weight": entry.weight,
                        "role": if entry.descriptor.kind.is_anomaly_detector() {
                            "anomaly_detector"
                        } else {
                            "classifier"
                        },
                    }),
                )
            })
            .collect();

        serde_json::json!({
            "models": models,
            "active_models": inner.active,
            "feature_layout": LayoutInfo::current(),
        })
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Ensemble Predictor
//!
//! Invokes every active model with the same normalized feature vector and
//! blends the per-model probabilities with configured weights:
//!
//!   ensemble_probability = Σ(weight_i × probability_i) / Σ(weight_i)
//!
//! Weighted linear pooling preserves each model's calibrated probability
//! and lets administrators tune contribution per model without retraining,
//! which majority voting cannot do.
//!
//! Active models are logically independent: each runs on the blocking pool
//! bounded by a timeout, so one slow or failing model is excluded from the
//! blend without aborting the others.

use std::sync::Arc;
use std::time::Duration;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::features::{FeatureVector, StandardScaler};
use crate::registry::{ActiveModel, ModelRegistry};

use super::types::{EnsembleOutcome, ExcludedModel, ModelContribution};

// ============================================================================
// ENSEMBLE PREDICTOR
// ============================================================================

pub struct EnsemblePredictor {
    registry: Arc<ModelRegistry>,
    scaler: StandardScaler,
    model_timeout: Duration,
}

impl EnsemblePredictor {
    pub fn new(registry: Arc<ModelRegistry>, config: &EngineConfig) -> Self {
        Self {
            registry,
            scaler: StandardScaler::trained(),
            model_timeout: Duration::from_millis(config.model_timeout_ms),
        }
    }

    /// Blend predictions from all active models.
    ///
    /// Fails hard with `NoActiveModels` when the active set is empty or
    /// every model was excluded - a blend over zero models carries no
    /// statistical meaning, so there is no degraded-mode fallback.
    pub async fn predict(&self, features: &FeatureVector) -> EngineResult<EnsembleOutcome> {
        let active = self.registry.active_snapshot();
        if active.is_empty() {
            return Err(EngineError::NoActiveModels);
        }

        // Normalize once with the frozen training statistics; every model
        // sees the identical input.
        let normalized = Arc::new(
            self.scaler
                .normalize(features)
                .map_err(|e| EngineError::Configuration(e.to_string()))?,
        );

        let mut tasks = Vec::with_capacity(active.len());
        for model in active {
            let task = self.spawn_inference(&model, Arc::clone(&normalized));
            tasks.push((model, task));
        }

        let mut contributions = Vec::new();
        let mut excluded = Vec::new();
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for (model, task) in tasks {
            let id = model.descriptor.id.clone();
            match task.await {
                Ok(Ok(score)) => {
                    weighted_sum += score.probability * model.weight;
                    total_weight += model.weight;
                    contributions.push(ModelContribution {
                        model_id: id,
                        kind: model.descriptor.kind,
                        probability: score.probability,
                        confidence: score.confidence,
                        weight: model.weight,
                        explanation: score.explanation,
                    });
                }
                Ok(Err(reason)) => {
                    log::warn!("Model {} excluded from ensemble: {}", id, reason);
                    excluded.push(ExcludedModel {
                        model_id: id,
                        reason,
                    });
                }
                Err(join_err) => {
                    log::warn!("Model {} task failed: {}", id, join_err);
                    excluded.push(ExcludedModel {
                        model_id: id,
                        reason: format!("inference task failed: {}", join_err),
                    });
                }
            }
        }

        if contributions.is_empty() {
            log::error!(
                "All {} active models excluded from ensemble",
                excluded.len()
            );
            return Err(EngineError::NoActiveModels);
        }

        let probability = if total_weight > 0.0 {
            weighted_sum / total_weight
        } else {
            // All surviving models carry zero weight; nothing to blend
            log::warn!("Total ensemble weight is zero, probability defaults to 0");
            0.0
        };

        Ok(EnsembleOutcome {
            probability,
            contributions,
            excluded,
        })
    }

    /// Run one model on the blocking pool with the configured bound.
    ///
    /// A timeout abandons this model's result without cancelling the
    /// others; the contract violation check happens here so out-of-range
    /// probabilities never reach the blend.
    fn spawn_inference(
        &self,
        model: &ActiveModel,
        features: Arc<FeatureVector>,
    ) -> tokio::task::JoinHandle<Result<crate::model::ModelScore, String>> {
        let handle = Arc::clone(&model.handle);
        let timeout = self.model_timeout;

        tokio::spawn(async move {
            let inference = tokio::task::spawn_blocking(move || handle.infer(&features));
            match tokio::time::timeout(timeout, inference).await {
                Ok(Ok(Ok(score))) => match score.validate() {
                    Ok(()) => Ok(score),
                    Err(e) => Err(e.to_string()),
                },
                Ok(Ok(Err(e))) => Err(e.to_string()),
                Ok(Err(join_err)) => Err(format!("inference panicked: {}", join_err)),
                Err(_) => Err(format!("inference timed out after {:?}", timeout)),
            }
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Scoring Pipeline - single public entry point
//!
//! Orchestrates extraction, ensemble prediction, risk scoring, and the
//! decision policy in a fixed sequence per transaction. Per-request data
//! is owned entirely by one `process` call; the registry and the
//! statistics counters are the only shared state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::ensemble::{EnsemblePredictor, ExcludedModel, ModelContribution};
use crate::error::EngineResult;
use crate::features;
use crate::model::FraudModel;
use crate::policy::{self, Recommendation, RiskFactor, RiskTier};
use crate::registry::{ModelDescriptor, ModelRegistry};
use crate::scoring;
use crate::transaction::Transaction;

// ============================================================================
// SCORING RESULT
// ============================================================================

/// Final artifact returned to the caller. Immutable once returned; the
/// engine keeps no copy - persistence belongs to external collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Engine-assigned id for audit correlation
    pub assessment_id: Uuid,
    pub transaction_id: String,
    /// Blended fraud probability in [0, 1]
    pub fraud_probability: f64,
    /// Composite risk score in [0, 100]
    pub risk_score: f64,
    pub is_flagged: bool,
    pub risk_tier: RiskTier,
    pub recommendation: Recommendation,
    /// Narrative factors, explanatory only
    pub risk_factors: Vec<RiskFactor>,
    /// Per-model contributions in active-set order
    pub model_breakdown: Vec<ModelContribution>,
    /// Models excluded by failure or timeout
    pub excluded_models: Vec<ExcludedModel>,
    /// Agreement-based confidence in the blend
    pub confidence: f64,
    pub processing_time_ms: f64,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// PIPELINE STATISTICS
// ============================================================================

/// Aggregate throughput figures for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStatistics {
    pub total_scored: u64,
    pub total_processing_time_ms: f64,
    pub avg_latency_ms: f64,
    pub throughput_per_second: f64,
    pub active_models: usize,
}

/// Owned counters, updated atomically across concurrent completions
struct PipelineStats {
    scored: AtomicU64,
    latency_sum_us: AtomicU64,
}

impl PipelineStats {
    fn new() -> Self {
        Self {
            scored: AtomicU64::new(0),
            latency_sum_us: AtomicU64::new(0),
        }
    }

    fn record(&self, elapsed_us: u64) {
        self.scored.fetch_add(1, Ordering::Relaxed);
        self.latency_sum_us.fetch_add(elapsed_us, Ordering::Relaxed);
    }

    fn snapshot(&self, active_models: usize) -> PipelineStatistics {
        let scored = self.scored.load(Ordering::Relaxed);
        let sum_us = self.latency_sum_us.load(Ordering::Relaxed);
        let total_ms = sum_us as f64 / 1_000.0;
        let avg_ms = if scored > 0 {
            total_ms / scored as f64
        } else {
            0.0
        };

        PipelineStatistics {
            total_scored: scored,
            total_processing_time_ms: total_ms,
            avg_latency_ms: avg_ms,
            throughput_per_second: if avg_ms > 0.0 { 1_000.0 / avg_ms } else { 0.0 },
            active_models,
        }
    }
}

// ============================================================================
// SCORING PIPELINE
// ============================================================================

/// The engine's single public entry point. Cheap to share behind an `Arc`
/// across a worker pool; every `process` call is independent.
pub struct ScoringPipeline {
    registry: Arc<ModelRegistry>,
    predictor: EnsemblePredictor,
    config: EngineConfig,
    stats: PipelineStats,
}

impl ScoringPipeline {
    pub fn new(config: EngineConfig) -> Self {
        let registry = Arc::new(ModelRegistry::new());
        let predictor = EnsemblePredictor::new(Arc::clone(&registry), &config);
        log::info!(
            "Scoring pipeline initialized (fraud_threshold={}, risk_score_threshold={})",
            config.fraud_threshold,
            config.risk_score_threshold
        );
        Self {
            registry,
            predictor,
            config,
            stats: PipelineStats::new(),
        }
    }

    /// Registry handle for administrative callers
    pub fn registry(&self) -> &Arc<ModelRegistry> {
        &self.registry
    }

    /// Score one transaction end to end.
    ///
    /// Any stage failure aborts the whole call with a typed error; a
    /// partially computed result is never returned.
    pub async fn process(&self, transaction: &Transaction) -> EngineResult<ScoringResult> {
        let start = Instant::now();

        let (feature_vector, signals) = features::extract(transaction).map_err(|e| {
            log::warn!("Rejected transaction {} at {}: {}", transaction.id, e.stage(), e);
            e
        })?;

        let outcome = self.predictor.predict(&feature_vector).await.map_err(|e| {
            log::warn!(
                "Scoring failed for transaction {} at {}: {}",
                transaction.id,
                e.stage(),
                e
            );
            e
        })?;

        let risk_score = scoring::calculate_risk_score(outcome.probability, &signals);
        let decision =
            policy::decide_with_config(risk_score, outcome.probability, &signals, &self.config);

        let elapsed = start.elapsed();
        self.stats.record(elapsed.as_micros() as u64);

        // Blocked transactions surface at warn so operators see them
        // without raising the global log level
        let level = if decision.recommendation.blocks_transaction() {
            log::Level::Warn
        } else {
            log::Level::Info
        };
        log::log!(
            level,
            "Transaction {}: fraud_prob={:.4}, risk_score={:.2}, flagged={}, recommendation={}",
            transaction.id,
            outcome.probability,
            risk_score,
            decision.is_flagged,
            decision.recommendation
        );

        Ok(ScoringResult {
            assessment_id: Uuid::new_v4(),
            transaction_id: transaction.id.clone(),
            fraud_probability: outcome.probability,
            risk_score,
            is_flagged: decision.is_flagged,
            risk_tier: decision.tier,
            recommendation: decision.recommendation,
            risk_factors: decision.factors,
            confidence: outcome.agreement_confidence(),
            model_breakdown: outcome.contributions,
            excluded_models: outcome.excluded,
            processing_time_ms: elapsed.as_secs_f64() * 1_000.0,
            timestamp: Utc::now(),
        })
    }

    /// Aggregate throughput statistics
    pub fn statistics(&self) -> PipelineStatistics {
        self.stats.snapshot(self.registry.active_count())
    }

    // ------------------------------------------------------------------
    // Administrative surface (delegates to the registry)
    // ------------------------------------------------------------------

    pub fn register_model(
        &self,
        descriptor: ModelDescriptor,
        handle: Arc<dyn FraudModel>,
        weight: f64,
    ) -> EngineResult<()> {
        self.registry.register(descriptor, handle, weight)
    }

    pub fn activate_model(&self, id: &str) -> EngineResult<()> {
        self.registry.activate(id)
    }

    pub fn deactivate_model(&self, id: &str) -> EngineResult<()> {
        self.registry.deactivate(id)
    }

    pub fn update_weights(&self, weights: &HashMap<String, f64>) -> Vec<String> {
        self.registry.update_weights(weights)
    }

    pub fn list_active_models(&self) -> Vec<ModelDescriptor> {
        self.registry.list_active()
    }

    /// Register a batch of models in one call, all at equal weight
    pub fn setup_models(
        &self,
        models: Vec<(ModelDescriptor, Arc<dyn FraudModel>)>,
    ) -> EngineResult<()> {
        let count = models.len();
        for (descriptor, handle) in models {
            self.register_model(descriptor, handle, 1.0)?;
        }
        log::info!("Registered {} models for inference", count);
        Ok(())
    }
}

impl Default for ScoringPipeline {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureVector;
    use crate::model::{InferenceError, ModelScore};
    use crate::registry::ModelKind;
    use chrono::TimeZone;

    struct FixedModel {
        probability: f64,
        confidence: f64,
    }

    impl FraudModel for FixedModel {
        fn infer(&self, _features: &FeatureVector) -> Result<ModelScore, InferenceError> {
            Ok(ModelScore {
                probability: self.probability,
                confidence: self.confidence,
                explanation: HashMap::new(),
            })
        }
    }

    fn descriptor(id: &str, kind: ModelKind) -> ModelDescriptor {
        ModelDescriptor::new(id, kind, "1.0").with_metrics(0.92, 0.89, 0.91, 0.90)
    }

    fn pipeline_with_model(probability: f64) -> ScoringPipeline {
        let pipeline = ScoringPipeline::default();
        pipeline
            .register_model(
                descriptor("rf_v1", ModelKind::RandomForest),
                Arc::new(FixedModel {
                    probability,
                    confidence: 0.92,
                }),
                1.0,
            )
            .unwrap();
        pipeline
    }

    fn transaction(amount: f64, balance: f64, hour: u32, location: &str) -> Transaction {
        Transaction {
            id: "txn_pipeline".to_string(),
            amount,
            balance,
            location: location.to_string(),
            device_fingerprint: "device_abc123".to_string(),
            payment_method: "credit_card".to_string(),
            customer_age: 35,
            transaction_type: "purchase".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 17, hour, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_process_returns_complete_result() {
        let pipeline = pipeline_with_model(0.05);
        let result = pipeline
            .process(&transaction(500.0, 25_000.0, 14, "known-city"))
            .await
            .unwrap();

        assert_eq!(result.transaction_id, "txn_pipeline");
        assert!((result.fraud_probability - 0.05).abs() < 1e-9);
        assert!(result.risk_score < 20.0);
        assert!(!result.is_flagged);
        assert_eq!(result.recommendation, Recommendation::Approve);
        assert_eq!(result.model_breakdown.len(), 1);
        assert!(result.processing_time_ms >= 0.0);
    }

    #[tokio::test]
    async fn test_invalid_input_aborts_before_models() {
        let pipeline = pipeline_with_model(0.05);
        let mut tx = transaction(500.0, 25_000.0, 14, "known-city");
        tx.amount = f64::NAN;

        let err = pipeline.process(&tx).await.unwrap_err();
        assert_eq!(err.stage(), "feature_extraction");
        // Pipeline never produced a result, so nothing was recorded
        assert_eq!(pipeline.statistics().total_scored, 0);
    }

    #[tokio::test]
    async fn test_empty_registry_fails_the_call() {
        let pipeline = ScoringPipeline::default();
        let err = pipeline
            .process(&transaction(500.0, 25_000.0, 14, "known-city"))
            .await
            .unwrap_err();
        assert_eq!(err.stage(), "ensemble");
    }

    #[tokio::test]
    async fn test_statistics_accumulate() {
        let pipeline = pipeline_with_model(0.05);
        let tx = transaction(500.0, 25_000.0, 14, "known-city");

        for _ in 0..3 {
            pipeline.process(&tx).await.unwrap();
        }

        let stats = pipeline.statistics();
        assert_eq!(stats.total_scored, 3);
        assert!(stats.avg_latency_ms >= 0.0);
        assert_eq!(stats.active_models, 1);
    }

    #[tokio::test]
    async fn test_concurrent_processing() {
        let pipeline = Arc::new(pipeline_with_model(0.05));
        let mut handles = Vec::new();

        for i in 0..16 {
            let pipeline = Arc::clone(&pipeline);
            handles.push(tokio::spawn(async move {
                let mut tx = transaction(500.0, 25_000.0, 14, "known-city");
                tx.id = format!("txn_{}", i);
                pipeline.process(&tx).await
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        // No lost updates across concurrent completions
        assert_eq!(pipeline.statistics().total_scored, 16);
    }

    #[tokio::test]
    async fn test_setup_models_registers_batch() {
        let pipeline = ScoringPipeline::default();
        pipeline
            .setup_models(vec![
                (
                    descriptor("rf_v1", ModelKind::RandomForest),
                    Arc::new(FixedModel {
                        probability: 0.2,
                        confidence: 0.92,
                    }) as Arc<dyn FraudModel>,
                ),
                (
                    descriptor("gb_v1", ModelKind::GradientBoosting),
                    Arc::new(FixedModel {
                        probability: 0.4,
                        confidence: 0.94,
                    }) as Arc<dyn FraudModel>,
                ),
            ])
            .unwrap();

        assert_eq!(pipeline.list_active_models().len(), 2);
    }
}

use crate::classifier::error::ClassifierError;
use crate::classifier::label_catalog::LabelCatalog;
use crate::classifier::pipeline::{best_of, ClassificationPipeline};
use crate::classifier::top_k::Classification;
use crate::config::Config;
use crate::inference::interface::InferenceBackend;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub best: Classification,
    pub ranked: Vec<Classification>,
    pub elapsed: Duration,
}

/// Classifier state for one camera-active period. Build a new session after
/// every camera restart so no smoothing history carries over.
pub struct ClassificationSession {
    pipeline: ClassificationPipeline,
    backend: Arc<dyn InferenceBackend + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassificationSession {
    pub fn new(
        config: &Config,
        labels: LabelCatalog,
        backend: Arc<dyn InferenceBackend + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        let pipeline = ClassificationPipeline::new(config, labels)?;
        let logger = logger.with_namespace("session");
        let _ = logger.info(&format!(
            "Session started with {} labels, {} filter stages, factor {}",
            pipeline.labels().len(),
            config.filter_stages,
            config.filter_factor
        ));

        Ok(Self {
            pipeline,
            backend,
            logger,
        })
    }

    /// Runs inference on one preprocessed frame, then smooths and ranks the
    /// scores. An inference failure leaves the filter untouched.
    pub fn recognize(&mut self, input: &[f32]) -> Result<Recognition, ClassifierError> {
        let start_time = Instant::now();
        let raw = self
            .backend
            .infer(input)
            .map_err(ClassifierError::Inference)?;
        let elapsed = start_time.elapsed();

        let ranked = self.pipeline.rank_frame(&raw)?;
        let best = best_of(&ranked)?;

        let _ = self.logger.info(&format!(
            "{} ({:.3}) in {}ms",
            best.label,
            best.confidence,
            elapsed.as_millis()
        ));

        Ok(Recognition {
            best,
            ranked,
            elapsed,
        })
    }

    #[allow(dead_code)]
    pub fn pipeline(&self) -> &ClassificationPipeline {
        &self.pipeline
    }
}

use crate::inference::interface::InferenceBackend;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Produces noisy scores where one label is usually ahead of the rest, so
/// the smoothed output settles on it.
pub struct InferenceBackendFake {
    label_count: usize,
    favoured: usize,
    input_len: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceBackendFake {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        label_count: usize,
        input_len: usize,
    ) -> Self {
        let favoured = if label_count == 0 {
            0
        } else {
            rand::random_range(0..label_count)
        };
        Self {
            label_count,
            favoured,
            input_len,
            logger: logger.with_namespace("inference").with_namespace("fake"),
        }
    }
}

impl InferenceBackend for InferenceBackendFake {
    fn infer(&self, input: &[f32]) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        if input.len() != self.input_len {
            return Err(format!(
                "expected input of {} values, got {}",
                self.input_len,
                input.len()
            )
            .into());
        }

        let mut rng = rand::rng();
        let noise = Uniform::new(0.0f32, 0.3)?;

        let scores = (0..self.label_count)
            .map(|index| {
                let base = if index == self.favoured { 0.5 } else { 0.0 };
                base + noise.sample(&mut rng)
            })
            .collect();

        self.logger.info(&format!(
            "Scored {} labels, favouring index {}",
            self.label_count, self.favoured
        ))?;

        Ok(scores)
    }
}

use crate::classifier::error::ClassifierError;

/// Multi-stage low pass filter over probability vectors.
///
/// Stage 0 follows the raw scores, every later stage follows the stage
/// before it. Each stage is an exponential moving average with the same
/// smoothing factor, so more stages give a steeper roll-off at the cost of
/// more lag.
#[derive(Debug, Clone)]
pub struct SmoothingFilter {
    stage_count: usize,
    label_count: usize,
    smoothing_factor: f32,
    // stage `i` lives at `stages[i * label_count..(i + 1) * label_count]`
    stages: Vec<f32>,
}

impl SmoothingFilter {
    pub fn new(
        stage_count: usize,
        smoothing_factor: f32,
        label_count: usize,
    ) -> Result<Self, ClassifierError> {
        if stage_count == 0 {
            return Err(ClassifierError::InvalidConfiguration(
                "filter needs at least one stage".to_string(),
            ));
        }
        if !(smoothing_factor > 0.0 && smoothing_factor <= 1.0) {
            return Err(ClassifierError::InvalidConfiguration(format!(
                "smoothing factor must be in (0, 1], got {}",
                smoothing_factor
            )));
        }
        if label_count == 0 {
            return Err(ClassifierError::InvalidConfiguration(
                "filter needs at least one label".to_string(),
            ));
        }

        Ok(Self {
            stage_count,
            label_count,
            smoothing_factor,
            stages: vec![0.0; stage_count * label_count],
        })
    }

    /// Feeds one raw vector through every stage and returns a copy of the
    /// last stage.
    #[allow(dead_code)]
    pub fn update(&mut self, raw: &[f32]) -> Result<Vec<f32>, ClassifierError> {
        self.apply(raw)?;
        Ok(self.output().to_vec())
    }

    /// Same as [`SmoothingFilter::update`] but writes into `out`.
    pub fn update_into(&mut self, raw: &[f32], out: &mut [f32]) -> Result<(), ClassifierError> {
        if out.len() != self.label_count {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.label_count,
                actual: out.len(),
            });
        }
        self.apply(raw)?;
        out.copy_from_slice(self.output());
        Ok(())
    }

    /// Current value of the last stage.
    pub fn output(&self) -> &[f32] {
        &self.stages[(self.stage_count - 1) * self.label_count..]
    }

    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.stages.fill(0.0);
    }

    #[allow(dead_code)]
    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    pub fn label_count(&self) -> usize {
        self.label_count
    }

    #[allow(dead_code)]
    pub fn smoothing_factor(&self) -> f32 {
        self.smoothing_factor
    }

    fn apply(&mut self, raw: &[f32]) -> Result<(), ClassifierError> {
        // Validate everything before touching state.
        if raw.len() != self.label_count {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.label_count,
                actual: raw.len(),
            });
        }
        if let Some((index, &value)) = raw.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ClassifierError::InvalidScore { index, value });
        }

        let n = self.label_count;
        let factor = self.smoothing_factor;

        let (first, _) = self.stages.split_at_mut(n);
        smooth_stage(first, raw, factor);

        for i in 1..self.stage_count {
            // Stage i reads stage i - 1 as already updated for this frame.
            let (previous, current) = self.stages[(i - 1) * n..(i + 1) * n].split_at_mut(n);
            smooth_stage(current, previous, factor);
        }

        Ok(())
    }
}

fn smooth_stage(stage: &mut [f32], input: &[f32], factor: f32) {
    if factor == 1.0 {
        stage.copy_from_slice(input);
        return;
    }
    for (value, &target) in stage.iter_mut().zip(input) {
        *value += factor * (target - *value);
    }
}

use crate::classifier::error::ClassifierError;
use crate::classifier::label_catalog::LabelCatalog;
use crate::classifier::smoothing_filter::SmoothingFilter;
use crate::classifier::top_k::{Classification, TopKSelector};
use crate::config::Config;

/// One frame's post-processing: smooth the raw scores, then rank them.
pub struct ClassificationPipeline {
    labels: LabelCatalog,
    filter: SmoothingFilter,
    selector: TopKSelector,
    smoothed: Vec<f32>,
}

impl ClassificationPipeline {
    /// Always starts from zeroed filter state.
    pub fn new(config: &Config, labels: LabelCatalog) -> Result<Self, ClassifierError> {
        let filter = SmoothingFilter::new(config.filter_stages, config.filter_factor, labels.len())?;
        let selector = TopKSelector::new(config.results_to_show)?;

        Ok(Self {
            smoothed: vec![0.0; filter.label_count()],
            labels,
            filter,
            selector,
        })
    }

    /// Ranks up to `results_to_show` labels, best first.
    pub fn rank_frame(&mut self, raw: &[f32]) -> Result<Vec<Classification>, ClassifierError> {
        self.filter.update_into(raw, &mut self.smoothed)?;
        self.selector
            .select(&self.smoothed, &self.labels, self.selector.max_results())
    }

    #[allow(dead_code)]
    pub fn classify_frame(&mut self, raw: &[f32]) -> Result<Classification, ClassifierError> {
        best_of(&self.rank_frame(raw)?)
    }

    pub fn labels(&self) -> &LabelCatalog {
        &self.labels
    }

    #[allow(dead_code)]
    pub fn filter(&self) -> &SmoothingFilter {
        &self.filter
    }
}

/// First entry of a ranked list.
pub fn best_of(ranked: &[Classification]) -> Result<Classification, ClassifierError> {
    ranked.first().cloned().ok_or(ClassifierError::EmptyCatalog)
}

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("dimension mismatch: expected {expected} scores, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("label catalog is empty")]
    EmptyCatalog,
    #[error("score at index {index} is not finite: {value}")]
    InvalidScore { index: usize, value: f32 },
    #[error("duplicate label in catalog: {0:?}")]
    DuplicateLabel(String),
    #[error("failed to read label file {path:?}: {source}")]
    LabelFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("inference failed: {0}")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),
}

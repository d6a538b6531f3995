use crate::classifier::error::ClassifierError;
use crate::classifier::label_catalog::LabelCatalog;
use crate::label_loader::interface::LabelLoader;
use std::path::PathBuf;

/// Reads a newline-delimited label file, one label per line.
pub struct LabelLoaderFile {
    path: PathBuf,
}

impl LabelLoaderFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LabelLoader for LabelLoaderFile {
    fn load(&self) -> Result<LabelCatalog, ClassifierError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| {
            ClassifierError::LabelFile {
                path: self.path.clone(),
                source,
            }
        })?;
        LabelCatalog::from_text(&text)
    }
}

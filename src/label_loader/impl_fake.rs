use crate::classifier::error::ClassifierError;
use crate::classifier::label_catalog::LabelCatalog;
use crate::label_loader::interface::LabelLoader;

pub struct LabelLoaderFake {
    labels: Vec<String>,
}

impl LabelLoaderFake {
    pub fn new(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|label| label.to_string()).collect(),
        }
    }

    pub fn plants() -> Self {
        Self::new(&[
            "rose",
            "oak",
            "fern",
            "tulip",
            "maple",
            "daisy",
            "sunflower",
            "cactus",
            "orchid",
            "lavender",
            "ivy",
            "bamboo",
        ])
    }
}

impl LabelLoader for LabelLoaderFake {
    fn load(&self) -> Result<LabelCatalog, ClassifierError> {
        LabelCatalog::new(self.labels.clone())
    }
}

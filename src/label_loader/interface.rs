use crate::classifier::error::ClassifierError;
use crate::classifier::label_catalog::LabelCatalog;

pub trait LabelLoader {
    fn load(&self) -> Result<LabelCatalog, ClassifierError>;
}

use crate::classifier::error::ClassifierError;
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered, immutable list of label names. Index `i` names score `i` of
/// every probability vector. Clones share the same storage.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCatalog {
    labels: Arc<[String]>,
}

impl LabelCatalog {
    pub fn new(labels: Vec<String>) -> Result<Self, ClassifierError> {
        if labels.is_empty() {
            return Err(ClassifierError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(ClassifierError::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self {
            labels: labels.into(),
        })
    }

    /// Parses a newline-delimited label file. Trailing empty lines are dropped.
    pub fn from_text(text: &str) -> Result<Self, ClassifierError> {
        let mut labels: Vec<String> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();

        while labels.last().is_some_and(|label| label.is_empty()) {
            labels.pop();
        }

        Self::new(labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

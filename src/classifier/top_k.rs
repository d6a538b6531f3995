use crate::classifier::error::ClassifierError;
use crate::classifier::label_catalog::LabelCatalog;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// Heap entry ordered by confidence, then by catalog position with the
/// earlier index ranking higher. `-0.0` and `0.0` count as equal.
#[derive(Debug, Clone, Copy)]
struct Entry {
    confidence: f32,
    index: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Adding 0.0 turns -0.0 into 0.0 so total_cmp sees a tie.
        (self.confidence + 0.0)
            .total_cmp(&(other.confidence + 0.0))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Returns the `k` highest scoring labels, best first. `k` is clamped to the
/// catalog size. Equal scores keep catalog order.
pub fn top_k(
    vector: &[f32],
    labels: &LabelCatalog,
    k: usize,
) -> Result<Vec<Classification>, ClassifierError> {
    if vector.len() != labels.len() {
        return Err(ClassifierError::DimensionMismatch {
            expected: labels.len(),
            actual: vector.len(),
        });
    }

    let k = k.min(vector.len());
    if k == 0 {
        return Ok(Vec::new());
    }

    // Min-heap holding the best k entries seen so far.
    let mut heap: BinaryHeap<Reverse<Entry>> = BinaryHeap::with_capacity(k + 1);
    for (index, &confidence) in vector.iter().enumerate() {
        heap.push(Reverse(Entry { confidence, index }));
        if heap.len() > k {
            heap.pop();
        }
    }

    // Ascending by Reverse is descending by Entry.
    let ranked = heap
        .into_sorted_vec()
        .into_iter()
        .filter_map(|Reverse(entry)| {
            labels.get(entry.index).map(|label| Classification {
                label: label.to_string(),
                confidence: entry.confidence,
            })
        })
        .collect();

    Ok(ranked)
}

/// Top-k selection with a configured ceiling on how many results are kept.
#[derive(Debug, Clone, Copy)]
pub struct TopKSelector {
    max_results: usize,
}

impl TopKSelector {
    pub fn new(max_results: usize) -> Result<Self, ClassifierError> {
        if max_results == 0 {
            return Err(ClassifierError::InvalidConfiguration(
                "selector must keep at least one result".to_string(),
            ));
        }
        Ok(Self { max_results })
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn select(
        &self,
        vector: &[f32],
        labels: &LabelCatalog,
        k: usize,
    ) -> Result<Vec<Classification>, ClassifierError> {
        top_k(vector, labels, k.min(self.max_results))
    }
}

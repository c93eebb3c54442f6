use std::collections::BTreeMap;

use crate::error::SimBatchError;

/// Integer class label attached to every dataset item.
pub type Label = i64;

/// A mini-batch: feature items paired with their class labels.
///
/// `features` and `labels` always have the same length; position `i` of one
/// belongs with position `i` of the other. A batch is created per draw and
/// handed to the caller, nothing keeps a reference to it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<X> {
    features: Vec<X>,
    labels: Vec<Label>,
}

impl<X> Batch<X> {
    /// Creates a batch from aligned feature and label sequences.
    ///
    /// # Errors
    ///
    /// Returns `SimBatchError::LengthMismatch` if the two sequences differ in length.
    pub fn new(features: Vec<X>, labels: Vec<Label>) -> Result<Self, SimBatchError> {
        if features.len() != labels.len() {
            return Err(SimBatchError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { features, labels })
    }

    /// Creates a batch with no examples.
    pub fn empty() -> Self {
        Self {
            features: Vec::new(),
            labels: Vec::new(),
        }
    }

    // Callers inside the workspace build both vectors from the same positions.
    pub(crate) fn from_aligned(features: Vec<X>, labels: Vec<Label>) -> Self {
        debug_assert_eq!(features.len(), labels.len());
        Self { features, labels }
    }

    pub fn features(&self) -> &[X] {
        &self.features
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of examples in the batch.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Keeps at most `max_len` leading examples.
    pub fn truncate(&mut self, max_len: usize) {
        self.features.truncate(max_len);
        self.labels.truncate(max_len);
    }

    /// Appends one example.
    pub fn push(&mut self, feature: X, label: Label) {
        self.features.push(feature);
        self.labels.push(label);
    }

    /// Splits the batch into its feature and label sequences.
    pub fn into_parts(self) -> (Vec<X>, Vec<Label>) {
        (self.features, self.labels)
    }

    /// Iterates over `(feature, label)` pairs in batch order.
    pub fn iter(&self) -> impl Iterator<Item = (&X, Label)> + '_ {
        self.features.iter().zip(self.labels.iter().copied())
    }

    /// Counts examples per label, ordered by label.
    pub fn distinct_labels(&self) -> BTreeMap<Label, usize> {
        let mut counts = BTreeMap::new();
        for &label in &self.labels {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }
}

impl<X> Default for Batch<X> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<X> FromIterator<(X, Label)> for Batch<X> {
    fn from_iter<I: IntoIterator<Item = (X, Label)>>(iter: I) -> Self {
        let (features, labels) = iter.into_iter().unzip();
        Self::from_aligned(features, labels)
    }
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;

use simbatch_core::{Batch, Label, SimBatchError};
use super::traits::Dataset;

/// An in-memory dataset of feature items and their class labels.
///
/// `x[i]` is labelled `y[i]`. Both sequences are owned by the dataset and are
/// never reordered; batches are built by gathering copies at chosen positions.
///
/// # Type Parameters
///
/// * `X`: The type of a feature item. Must be `Clone + Send + 'static`.
#[derive(Debug, Clone)]
pub struct LabeledDataset<X: Clone + Send + 'static> {
    x: Vec<X>,
    y: Vec<Label>,
}

impl<X: Clone + Send + 'static> LabeledDataset<X> {
    /// Creates a new `LabeledDataset` from aligned feature and label vectors.
    ///
    /// # Errors
    ///
    /// Returns `SimBatchError::LengthMismatch` if `x` and `y` differ in length.
    pub fn new(x: Vec<X>, y: Vec<Label>) -> Result<Self, SimBatchError> {
        if x.len() != y.len() {
            return Err(SimBatchError::LengthMismatch {
                features: x.len(),
                labels: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn features(&self) -> &[X] {
        &self.x
    }

    pub fn labels(&self) -> &[Label] {
        &self.y
    }

    /// Builds a batch from the items at `positions`, in the given order.
    ///
    /// # Panics
    ///
    /// Panics if a position is out of bounds. Samplers only pass positions
    /// taken from their own index.
    pub fn gather(&self, positions: &[usize]) -> Batch<X> {
        positions
            .iter()
            .map(|&idx| (self.x[idx].clone(), self.y[idx]))
            .collect()
    }
}

impl<X: Clone + Send + 'static> Dataset for LabeledDataset<X> {
    type Item = (X, Label);

    /// Returns a clone of the `(feature, label)` pair at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, SimBatchError> {
        match (self.x.get(index), self.y.get(index)) {
            (Some(x), Some(&y)) => Ok((x.clone(), y)),
            _ => Err(SimBatchError::IndexOutOfBounds {
                index,
                len: self.y.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.y.len()
    }
}

#[cfg(test)]
#[path = "labeled_dataset_test.rs"]
mod tests;

// simbatch-data/src/datasets/traits.rs

use simbatch_core::SimBatchError;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items, where each item is typically a
/// `(feature, label)` pair, or any other custom type that implements
/// `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `SimBatchError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, SimBatchError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// simbatch-data/src/samplers/traits.rs

use rand::RngCore;
use simbatch_core::Batch;
use std::fmt::Debug;

/// A sampler that assembles class-balanced batches from an in-memory dataset.
///
/// Samplers are driven by `BatchGenerator`, which resolves the per-batch
/// `num_classes` and `example_per_class` from its policy and calls
/// `get_examples_with_rng` once per batch.
///
/// Draws take `&self` and never mutate the sampler, so a sampler can be
/// shared between threads.
pub trait BatchSampler: Debug + Send + Sync {
    /// The type of a single feature item.
    type Item: Clone + Send + 'static;

    /// Draws one batch using the provided random number generator.
    ///
    /// # Arguments
    ///
    /// * `rng` - Source of randomness for this draw.
    /// * `batch_id` - Index of the batch within the epoch. Reserved for
    ///   samplers whose behaviour depends on it.
    /// * `num_classes` - Number of classes to draw.
    /// * `example_per_class` - Number of examples to draw for each class.
    fn get_examples_with_rng(
        &self,
        rng: &mut dyn RngCore,
        batch_id: usize,
        num_classes: usize,
        example_per_class: usize,
    ) -> Batch<Self::Item>;

    /// Draws one batch using the thread-local random number generator.
    fn get_examples(
        &self,
        batch_id: usize,
        num_classes: usize,
        example_per_class: usize,
    ) -> Batch<Self::Item> {
        let mut rng = rand::thread_rng();
        self.get_examples_with_rng(&mut rng, batch_id, num_classes, example_per_class)
    }

    /// Returns the number of examples the sampler draws from.
    fn num_examples(&self) -> usize;

    /// Returns the number of distinct classes the sampler can draw.
    fn num_classes_available(&self) -> usize;

    /// Upper bound the sampler applies to its own draws, if any.
    fn batch_limit(&self) -> Option<usize> {
        None
    }
}

// simbatch-data/src/samplers/single_shot_sampler.rs

use super::traits::BatchSampler;
use log::{debug, trace};
use rand::distributions::{Distribution, Uniform};
use rand::RngCore;
use simbatch_core::{Batch, Label, SimBatchError};
use std::fmt::Debug;

/// A sampler for datasets where each example is its own class.
///
/// A draw picks `num_classes` positions uniformly at random, with
/// replacement, and labels each example with its position. Several examples
/// per class are expected to come from an augmenter applied afterwards, so
/// `example_per_class` has no effect here.
///
/// Positions are drawn independently instead of shuffling the whole
/// dataset, which keeps a draw O(`num_classes`) for very large datasets at
/// the cost of possible duplicate classes within a batch.
#[derive(Debug, Clone)]
pub struct SingleShotSampler<X: Clone + Send + 'static> {
    x: Vec<X>,
    positions: Uniform<usize>,
}

impl<X: Clone + Send + 'static> SingleShotSampler<X> {
    /// Creates a new `SingleShotSampler`.
    ///
    /// # Errors
    ///
    /// Returns `SimBatchError::EmptyDataset` if `x` is empty.
    pub fn new(x: Vec<X>) -> Result<Self, SimBatchError> {
        if x.is_empty() {
            return Err(SimBatchError::EmptyDataset {
                operation: "SingleShotSampler::new".to_string(),
            });
        }
        debug!("SingleShotSampler: {} single-example classes", x.len());
        let positions = Uniform::new(0, x.len());
        Ok(Self { x, positions })
    }

    /// Number of examples, which is also the number of classes.
    pub fn num_elts(&self) -> usize {
        self.x.len()
    }

    pub fn features(&self) -> &[X] {
        &self.x
    }
}

impl<X: Clone + Send + Sync + Debug + 'static> BatchSampler for SingleShotSampler<X> {
    type Item = X;

    fn get_examples_with_rng(
        &self,
        rng: &mut dyn RngCore,
        batch_id: usize,
        num_classes: usize,
        _example_per_class: usize,
    ) -> Batch<X> {
        let batch: Batch<X> = (0..num_classes)
            .map(|_| {
                let idx = self.positions.sample(rng);
                (self.x[idx].clone(), idx as Label)
            })
            .collect();

        trace!(
            "SingleShotSampler: batch {} drew {} examples",
            batch_id,
            batch.len()
        );
        batch
    }

    fn num_examples(&self) -> usize {
        self.x.len()
    }

    fn num_classes_available(&self) -> usize {
        self.x.len()
    }
}

#[cfg(test)]
#[path = "single_shot_sampler_test.rs"]
mod tests;

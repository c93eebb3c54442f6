// simbatch-data/src/augment.rs

use log::trace;
use simbatch_core::{Batch, SimBatchError};

/// Transforms a drawn batch before it reaches the training loop.
///
/// Called by `BatchGenerator` after each draw with the resolved
/// `example_per_class` and the policy's warmup flag.
pub trait Augmenter<X>: Send + Sync {
    fn augment(
        &self,
        batch: Batch<X>,
        example_per_class: usize,
        is_warmup: bool,
    ) -> Result<Batch<X>, SimBatchError>;
}

impl<X, F> Augmenter<X> for F
where
    F: Fn(Batch<X>, usize, bool) -> Result<Batch<X>, SimBatchError> + Send + Sync,
{
    fn augment(
        &self,
        batch: Batch<X>,
        example_per_class: usize,
        is_warmup: bool,
    ) -> Result<Batch<X>, SimBatchError> {
        self(batch, example_per_class, is_warmup)
    }
}

/// Expands every example into `example_per_class` variants sharing its label.
///
/// The variant `k` of an item is `transform(&item, k)`. Variants of one
/// example are emitted next to each other. During warmup the batch is
/// returned unchanged.
///
/// Paired with `SingleShotSampler`, this turns one example per class into
/// several.
#[derive(Debug, Clone)]
pub struct RepeatAugmenter<F> {
    transform: F,
}

impl<F> RepeatAugmenter<F> {
    pub fn new(transform: F) -> Self {
        RepeatAugmenter { transform }
    }
}

impl<X: Clone> RepeatAugmenter<fn(&X, usize) -> X> {
    /// Repeats each example as plain clones.
    pub fn identity() -> Self {
        RepeatAugmenter::new(|x: &X, _| x.clone())
    }
}

impl<X, F> Augmenter<X> for RepeatAugmenter<F>
where
    F: Fn(&X, usize) -> X + Send + Sync,
{
    fn augment(
        &self,
        batch: Batch<X>,
        example_per_class: usize,
        is_warmup: bool,
    ) -> Result<Batch<X>, SimBatchError> {
        if is_warmup {
            return Ok(batch);
        }
        let (features, labels) = batch.into_parts();
        let mut augmented = Batch::empty();
        for (item, label) in features.iter().zip(labels) {
            for variant in 0..example_per_class {
                augmented.push((self.transform)(item, variant), label);
            }
        }
        trace!(
            "RepeatAugmenter: {} examples expanded to {}",
            features.len(),
            augmented.len()
        );
        Ok(augmented)
    }
}

#[cfg(test)]
#[path = "augment_test.rs"]
mod tests;

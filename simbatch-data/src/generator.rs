// generator.rs
//! # BatchGenerator
//!
//! Drives a `BatchSampler` through epochs: resolves each batch's composition
//! from a `BatchPolicy`, draws it, optionally augments it and caps it at the
//! configured batch size.
//!
//! ## Basic usage
//!
//! ```rust
//! use simbatch_data::config::GeneratorConfig;
//! use simbatch_data::generator::BatchGenerator;
//! use simbatch_data::samplers::MultiShotSampler;
//!
//! let x = vec![0.1f32, 0.2, 0.3, 0.4, 0.5, 0.6];
//! let y = vec![0, 0, 1, 1, 2, 2];
//! let config = GeneratorConfig {
//!     class_per_batch: 2,
//!     batch_size: 4,
//!     batch_per_epoch: 3,
//!     seed: Some(7),
//!     ..GeneratorConfig::default()
//! };
//! let sampler = MultiShotSampler::new(x, y, config.batch_size).unwrap();
//! let mut generator = BatchGenerator::new(sampler, config).unwrap();
//! for batch in &mut generator {
//!     let batch = batch.expect("no augmenter, draws cannot fail");
//!     assert!(batch.len() <= 4);
//! }
//! assert_eq!(generator.epoch(), 1);
//! ```
//!
//! ## Epochs
//!
//! Iterating yields `batch_per_epoch` batches, then `None` once while the
//! generator moves on to the next epoch. Each `for` loop over the generator
//! is therefore one epoch.

use crate::augment::Augmenter;
use crate::config::GeneratorConfig;
use crate::policy::{BatchPolicy, FixedPolicy, WarmupPolicy};
use crate::samplers::BatchSampler;
use log::{info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simbatch_core::{Batch, SimBatchError};

/// Boxed augmentation hook applied to every drawn batch.
pub type BoxedAugmenter<X> = Box<dyn Augmenter<X>>;

/// Produces class-balanced batches, epoch after epoch.
///
/// # Type Parameters
/// - `S`: The sampler, which must implement [`BatchSampler`].
///
/// The generator owns the epoch counter and the random number generator, so
/// it is driven from a single thread. The sampler itself can be shared.
pub struct BatchGenerator<S: BatchSampler> {
    sampler: S,
    config: GeneratorConfig,
    policy: Box<dyn BatchPolicy>,
    augmenter: Option<BoxedAugmenter<S::Item>>,
    epoch: usize,
    cursor: usize,
    rng: StdRng,
}

impl<S: BatchSampler> BatchGenerator<S> {
    /// Creates a new generator.
    ///
    /// The default policy draws `class_per_batch` classes with
    /// `batch_size / class_per_batch` examples each, in warmup for the first
    /// `warmup_epochs` epochs.
    ///
    /// A sampler with its own batch limit (`MultiShotSampler`) caps draws
    /// before augmentation, and `config.batch_size` caps the final batch.
    /// The smaller of the two wins; a warning is logged when the sampler's
    /// limit is below `config.batch_size`.
    ///
    /// # Errors
    ///
    /// Returns `SimBatchError::ConfigurationError` if the config is invalid.
    pub fn new(sampler: S, config: GeneratorConfig) -> Result<Self, SimBatchError> {
        config.validate()?;
        let fixed = FixedPolicy::from_batch_size(config.class_per_batch, config.batch_size)?;
        let policy = WarmupPolicy::new(fixed, config.warmup_epochs);
        if let Some(limit) = sampler.batch_limit() {
            if limit < config.batch_size {
                warn!(
                    "BatchGenerator: sampler caps batches at {} examples, below the configured batch size of {}",
                    limit,
                    config.batch_size
                );
            }
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            "BatchGenerator: initial batch size is {} ({} classes x {} examples per class), {} batches per epoch",
            config.batch_size,
            policy.num_classes(0, 0),
            policy.example_per_class(0, 0),
            config.batch_per_epoch
        );

        Ok(Self {
            sampler,
            config,
            policy: Box::new(policy),
            augmenter: None,
            epoch: 0,
            cursor: 0,
            rng,
        })
    }

    /// Replaces the batch policy.
    pub fn with_policy<P: BatchPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Sets the augmentation hook applied after each draw.
    pub fn with_augmenter<A: Augmenter<S::Item> + 'static>(mut self, augmenter: A) -> Self {
        self.augmenter = Some(Box::new(augmenter));
        self
    }

    /// Builds the batch at position `batch_id` of the current epoch.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the augmenter.
    pub fn generate_batch(&mut self, batch_id: usize) -> Result<Batch<S::Item>, SimBatchError> {
        let num_classes = self.policy.num_classes(batch_id, self.epoch);
        let example_per_class = self.policy.example_per_class(batch_id, self.epoch);

        let mut batch = self.sampler.get_examples_with_rng(
            &mut self.rng,
            batch_id,
            num_classes,
            example_per_class,
        );

        if let Some(augmenter) = &self.augmenter {
            let is_warmup = self.policy.is_warmup(self.epoch);
            batch = augmenter.augment(batch, example_per_class, is_warmup)?;
        }

        if batch.len() > self.config.batch_size {
            trace!(
                "BatchGenerator: truncating batch {} from {} to {} examples",
                batch_id,
                batch.len(),
                self.config.batch_size
            );
            batch.truncate(self.config.batch_size);
        }
        Ok(batch)
    }

    /// Marks the end of the current epoch.
    pub fn on_epoch_end(&mut self) {
        let was_warmup = self.policy.is_warmup(self.epoch);
        self.epoch += 1;
        self.cursor = 0;
        info!("BatchGenerator: epoch {} complete", self.epoch);
        if was_warmup && !self.policy.is_warmup(self.epoch) {
            info!("BatchGenerator: warmup complete after {} epochs", self.epoch);
        }
    }

    /// Number of batches per epoch.
    pub fn len(&self) -> usize {
        self.config.batch_per_epoch
    }

    pub fn is_empty(&self) -> bool {
        self.config.batch_per_epoch == 0
    }

    /// Number of completed epochs.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn is_warmup(&self) -> bool {
        self.policy.is_warmup(self.epoch)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }
}

impl<S: BatchSampler> Iterator for BatchGenerator<S> {
    type Item = Result<Batch<S::Item>, SimBatchError>;

    /// Returns the next batch of the current epoch.
    ///
    /// # Returns
    /// - `Some(Ok(batch))`: the next batch.
    /// - `Some(Err(e))`: the augmenter failed on this batch.
    /// - `None`: the epoch is over; the following call starts the next one.
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.config.batch_per_epoch {
            self.on_epoch_end();
            return None;
        }
        let batch_id = self.cursor;
        self.cursor += 1;
        Some(self.generate_batch(batch_id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.batch_per_epoch.saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;

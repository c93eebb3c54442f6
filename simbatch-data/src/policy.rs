// simbatch-data/src/policy.rs

use simbatch_core::SimBatchError;
use std::fmt::Debug;

/// Decides the composition of each batch.
///
/// A policy maps a batch position (`batch_id` within `epoch`) to the number
/// of classes and examples per class a sampler should draw, and says whether
/// augmentation is still warming up.
pub trait BatchPolicy: Debug + Send + Sync {
    /// Number of classes to draw for this batch.
    fn num_classes(&self, batch_id: usize, epoch: usize) -> usize;

    /// Number of examples to draw per class for this batch.
    fn example_per_class(&self, batch_id: usize, epoch: usize) -> usize;

    /// Whether `epoch` still falls within the warmup period.
    fn is_warmup(&self, _epoch: usize) -> bool {
        false
    }
}

fn examples_for(batch_size: usize, num_classes: usize) -> usize {
    (batch_size / num_classes.max(1)).max(1)
}

/// Draws the same number of classes and examples for every batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPolicy {
    class_per_batch: usize,
    example_per_class: usize,
}

impl FixedPolicy {
    pub fn new(class_per_batch: usize, example_per_class: usize) -> Self {
        FixedPolicy {
            class_per_batch,
            example_per_class,
        }
    }

    /// Splits `batch_size` evenly across `class_per_batch` classes.
    ///
    /// `example_per_class` is `batch_size / class_per_batch`, and at least 1.
    ///
    /// # Errors
    ///
    /// Returns `SimBatchError::ConfigurationError` if `class_per_batch` is 0.
    pub fn from_batch_size(class_per_batch: usize, batch_size: usize) -> Result<Self, SimBatchError> {
        if class_per_batch == 0 {
            return Err(SimBatchError::ConfigurationError(
                "FixedPolicy: class_per_batch cannot be zero.".to_string(),
            ));
        }
        Ok(Self::new(class_per_batch, examples_for(batch_size, class_per_batch)))
    }
}

impl BatchPolicy for FixedPolicy {
    fn num_classes(&self, _batch_id: usize, _epoch: usize) -> usize {
        self.class_per_batch
    }

    fn example_per_class(&self, _batch_id: usize, _epoch: usize) -> usize {
        self.example_per_class
    }
}

/// Scales the number of classes by `gamma` every `step_size` epochs.
///
/// The class count is clamped to `[1, max_classes]` and the examples per class
/// are recomputed so that the batch stays close to `batch_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepPolicy {
    initial_classes: usize,
    max_classes: usize,
    batch_size: usize,
    step_size: usize,
    gamma: f32,
}

impl StepPolicy {
    /// Creates a new `StepPolicy`.
    ///
    /// # Arguments
    ///
    /// * `initial_classes` - Classes per batch during the first `step_size` epochs.
    /// * `max_classes` - Upper bound on classes per batch.
    /// * `batch_size` - Target batch size used to derive examples per class.
    /// * `step_size` - Number of epochs between two updates.
    /// * `gamma` - Multiplicative factor applied to the class count at each update.
    ///
    /// # Errors
    ///
    /// Returns `SimBatchError::ConfigurationError` if `step_size` or
    /// `initial_classes` is zero, or if `gamma` is not a positive finite number.
    pub fn new(
        initial_classes: usize,
        max_classes: usize,
        batch_size: usize,
        step_size: usize,
        gamma: f32,
    ) -> Result<Self, SimBatchError> {
        if step_size == 0 {
            return Err(SimBatchError::ConfigurationError(
                "StepPolicy: step_size cannot be zero.".to_string(),
            ));
        }
        if initial_classes == 0 {
            return Err(SimBatchError::ConfigurationError(
                "StepPolicy: initial_classes cannot be zero.".to_string(),
            ));
        }
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(SimBatchError::ConfigurationError(format!(
                "StepPolicy: gamma must be a positive finite number, got {}",
                gamma
            )));
        }
        Ok(StepPolicy {
            initial_classes,
            max_classes: max_classes.max(1),
            batch_size,
            step_size,
            gamma,
        })
    }
}

impl BatchPolicy for StepPolicy {
    fn num_classes(&self, _batch_id: usize, epoch: usize) -> usize {
        let steps = i32::try_from(epoch / self.step_size).unwrap_or(i32::MAX);
        let scaled = self.initial_classes as f64 * (self.gamma as f64).powi(steps);
        (scaled.round() as usize).clamp(1, self.max_classes)
    }

    fn example_per_class(&self, batch_id: usize, epoch: usize) -> usize {
        examples_for(self.batch_size, self.num_classes(batch_id, epoch))
    }
}

/// Wraps a policy and reports warmup for the first `warmup_epochs` epochs.
#[derive(Debug, Clone)]
pub struct WarmupPolicy<P: BatchPolicy> {
    inner: P,
    warmup_epochs: usize,
}

impl<P: BatchPolicy> WarmupPolicy<P> {
    pub fn new(inner: P, warmup_epochs: usize) -> Self {
        WarmupPolicy {
            inner,
            warmup_epochs,
        }
    }

    pub fn warmup_epochs(&self) -> usize {
        self.warmup_epochs
    }
}

impl<P: BatchPolicy> BatchPolicy for WarmupPolicy<P> {
    fn num_classes(&self, batch_id: usize, epoch: usize) -> usize {
        self.inner.num_classes(batch_id, epoch)
    }

    fn example_per_class(&self, batch_id: usize, epoch: usize) -> usize {
        self.inner.example_per_class(batch_id, epoch)
    }

    fn is_warmup(&self, epoch: usize) -> bool {
        epoch < self.warmup_epochs || self.inner.is_warmup(epoch)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod tests;

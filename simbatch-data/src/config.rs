// simbatch-data/src/config.rs

use simbatch_core::SimBatchError;

/// Settings shared by every `BatchGenerator`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of distinct classes drawn for each batch.
    pub class_per_batch: usize,
    /// Maximum number of examples in a batch, applied after augmentation.
    /// A sampler built with a smaller batch size still caps its own draws.
    pub batch_size: usize,
    /// Number of batches yielded per epoch.
    pub batch_per_epoch: usize,
    /// Number of epochs during which augmentation runs in warmup mode. 0 disables warmup.
    pub warmup_epochs: usize,
    /// Seed for the generator's random number generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            class_per_batch: 2,
            batch_size: 32,
            batch_per_epoch: 1000,
            warmup_epochs: 0,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates a config with default settings and the given number of classes per batch.
    pub fn new(class_per_batch: usize) -> Self {
        Self {
            class_per_batch,
            ..Self::default()
        }
    }

    /// Checks that every count is non-zero.
    ///
    /// # Errors
    ///
    /// Returns `SimBatchError::ConfigurationError` naming the first offending field.
    pub fn validate(&self) -> Result<(), SimBatchError> {
        let counts = [
            ("class_per_batch", self.class_per_batch),
            ("batch_size", self.batch_size),
            ("batch_per_epoch", self.batch_per_epoch),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(SimBatchError::ConfigurationError(format!(
                    "GeneratorConfig: {} must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

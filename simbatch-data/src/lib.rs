//! Class-balanced batch sampling for metric-learning training loops.
//!
//! - [`samplers`]: `MultiShotSampler` (several examples per class) and
//!   `SingleShotSampler` (one example per class).
//! - [`policy`]: per-batch class and example counts, with warmup.
//! - [`augment`]: hooks applied to drawn batches.
//! - [`generator`]: the epoch loop tying them together.

pub mod augment;
pub mod config;
pub mod datasets;
pub mod generator;
pub mod policy;
pub mod samplers;

// Re-export main components
pub use augment::{Augmenter, RepeatAugmenter};
pub use config::GeneratorConfig;
pub use datasets::{Dataset, LabeledDataset};
pub use generator::BatchGenerator;
pub use policy::{BatchPolicy, FixedPolicy, StepPolicy, WarmupPolicy};
pub use samplers::{BatchSampler, MultiShotSampler, SingleShotSampler};
pub use simbatch_core::{Batch, Label, SimBatchError};

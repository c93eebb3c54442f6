// Shared vocabulary for the SimBatch crates: labels, batches and errors.
pub mod batch;
pub mod error;

pub use batch::{Batch, Label};
pub use error::SimBatchError;

pub mod traits;
pub mod labeled_dataset;

pub use traits::Dataset;
pub use labeled_dataset::LabeledDataset;

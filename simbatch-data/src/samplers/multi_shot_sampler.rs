// simbatch-data/src/samplers/multi_shot_sampler.rs

use super::traits::BatchSampler;
use crate::datasets::LabeledDataset;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::RngCore;
use simbatch_core::{Batch, Label, SimBatchError};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A sampler for datasets holding several examples per class.
///
/// The label to position index is computed once at construction. Each draw
/// picks `num_classes` classes at random, then up to `example_per_class`
/// positions from each, shuffles the union and keeps at most `batch_size`
/// of them.
#[derive(Debug, Clone)]
pub struct MultiShotSampler<X: Clone + Send + 'static> {
    dataset: LabeledDataset<X>,
    batch_size: usize,
    // Distinct labels, in order of first appearance in `y`.
    class_list: Vec<Label>,
    index_per_class: BTreeMap<Label, Vec<usize>>,
}

impl<X: Clone + Send + 'static> MultiShotSampler<X> {
    /// Creates a new `MultiShotSampler` and indexes `x` by class.
    ///
    /// # Arguments
    ///
    /// * `x` - Feature items.
    /// * `y` - Class label of each feature item.
    /// * `batch_size` - Upper bound on the number of examples per batch.
    ///
    /// # Errors
    ///
    /// Returns `SimBatchError::LengthMismatch` if `x` and `y` differ in length
    /// and `SimBatchError::EmptyDataset` if they are empty.
    pub fn new(x: Vec<X>, y: Vec<Label>, batch_size: usize) -> Result<Self, SimBatchError> {
        let dataset = LabeledDataset::new(x, y)?;
        if dataset.labels().is_empty() {
            return Err(SimBatchError::EmptyDataset {
                operation: "MultiShotSampler::new".to_string(),
            });
        }

        let mut class_list = Vec::new();
        let mut index_per_class: BTreeMap<Label, Vec<usize>> = BTreeMap::new();
        for (idx, &class_id) in dataset.labels().iter().enumerate() {
            let positions = index_per_class.entry(class_id).or_insert_with(|| {
                class_list.push(class_id);
                Vec::new()
            });
            positions.push(idx);
        }

        debug!(
            "MultiShotSampler: indexed {} examples into {} classes",
            dataset.labels().len(),
            class_list.len()
        );

        Ok(Self {
            dataset,
            batch_size,
            class_list,
            index_per_class,
        })
    }

    /// Distinct labels present in the dataset.
    pub fn class_list(&self) -> &[Label] {
        &self.class_list
    }

    /// Dataset positions holding each label.
    pub fn class_index(&self) -> &BTreeMap<Label, Vec<usize>> {
        &self.index_per_class
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn dataset(&self) -> &LabeledDataset<X> {
        &self.dataset
    }
}

impl<X: Clone + Send + Sync + Debug + 'static> BatchSampler for MultiShotSampler<X> {
    type Item = X;

    fn get_examples_with_rng(
        &self,
        rng: &mut dyn RngCore,
        batch_id: usize,
        num_classes: usize,
        example_per_class: usize,
    ) -> Batch<X> {
        if num_classes > self.class_list.len() {
            debug!(
                "MultiShotSampler: {} classes requested but only {} available",
                num_classes,
                self.class_list.len()
            );
        }

        // choose_multiple clamps the amount to the slice length and leaves
        // the stored lists untouched. Requested counts may be arbitrarily
        // large, so the buffer is sized from what the dataset can supply.
        let mut idxs: Vec<usize> = Vec::with_capacity(self.dataset.labels().len());
        for class_id in self.class_list.choose_multiple(rng, num_classes) {
            let class_idxs = &self.index_per_class[class_id];
            idxs.extend(class_idxs.choose_multiple(rng, example_per_class).copied());
        }

        idxs.shuffle(rng);
        idxs.truncate(self.batch_size);

        trace!(
            "MultiShotSampler: batch {} drew {} examples ({} classes x {} per class requested)",
            batch_id,
            idxs.len(),
            num_classes,
            example_per_class
        );

        self.dataset.gather(&idxs)
    }

    fn num_examples(&self) -> usize {
        self.dataset.labels().len()
    }

    fn num_classes_available(&self) -> usize {
        self.class_list.len()
    }

    fn batch_limit(&self) -> Option<usize> {
        Some(self.batch_size)
    }
}

#[cfg(test)]
#[path = "multi_shot_sampler_test.rs"]
mod tests;

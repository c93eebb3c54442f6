//! Example: class-balanced batches from MultiShotSampler and SingleShotSampler.
//!
//! Run with `RUST_LOG=debug` to see indexing and epoch logs.

use simbatch_data::{
    BatchGenerator, GeneratorConfig, MultiShotSampler, RepeatAugmenter, SingleShotSampler,
};

fn main() {
    env_logger::init();

    // Synthetic 2-d embeddings: 5 classes, 6 examples each
    let mut x = Vec::new();
    let mut y = Vec::new();
    for class_id in 0..5i64 {
        for k in 0..6 {
            x.push([class_id as f32, k as f32 * 0.1]);
            y.push(class_id);
        }
    }

    let config = GeneratorConfig {
        class_per_batch: 3,
        batch_size: 9,
        batch_per_epoch: 4,
        seed: Some(0),
        ..GeneratorConfig::default()
    };

    // MultiShotSampler: several stored examples per class
    let sampler = MultiShotSampler::new(x, y, config.batch_size).expect("Dataset non vide");
    let mut generator = BatchGenerator::new(sampler, config.clone()).expect("Config valide");
    println!("\n--- MultiShotSampler ---");
    for (i, batch) in generator.by_ref().enumerate() {
        let batch = batch.expect("Pas d'erreur attendue");
        println!("Batch {i}: labels {:?} -> {:?}", batch.labels(), batch.distinct_labels());
    }

    // SingleShotSampler: one example per class, augmentation makes the rest
    let images: Vec<String> = (0..1000).map(|i| format!("img_{i:04}")).collect();
    let sampler = SingleShotSampler::new(images).expect("Dataset non vide");
    let augmenter = RepeatAugmenter::new(|name: &String, k: usize| format!("{name}#flip{k}"));
    let mut generator = BatchGenerator::new(sampler, config)
        .expect("Config valide")
        .with_augmenter(augmenter);
    println!("\n--- SingleShotSampler + RepeatAugmenter ---");
    for (i, batch) in generator.by_ref().enumerate() {
        let batch = batch.expect("Pas d'erreur attendue");
        println!("Batch {i}:");
        for (feature, label) in batch.iter() {
            println!("  class {label:4} : {feature}");
        }
    }
}

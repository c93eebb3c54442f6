// simbatch-data/src/samplers/single_shot_sampler_test.rs

use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_single_shot_sampler_new_empty_dataset() {
    match SingleShotSampler::<f32>::new(vec![]) {
        Err(SimBatchError::EmptyDataset { operation }) => {
            assert_eq!(operation, "SingleShotSampler::new");
        }
        _ => panic!("Expected EmptyDataset error"),
    }
}

#[test]
fn test_single_shot_sampler_num_elts() {
    let sampler = SingleShotSampler::new(vec!["a", "b", "c"]).unwrap();
    assert_eq!(sampler.num_elts(), 3);
    assert_eq!(sampler.num_examples(), 3);
    assert_eq!(sampler.num_classes_available(), 3);
}

#[test]
fn test_single_shot_sampler_returns_num_classes_examples() {
    let sampler = SingleShotSampler::new((0..5).collect::<Vec<u32>>()).unwrap();
    let mut rng = StdRng::seed_from_u64(17);
    // No truncation: more classes than examples is allowed with replacement.
    for num_classes in [0, 1, 4, 5, 12] {
        let batch = sampler.get_examples_with_rng(&mut rng, 0, num_classes, 3);
        assert_eq!(batch.len(), num_classes);
    }
}

#[test]
fn test_single_shot_sampler_labels_are_positions() {
    let x: Vec<String> = (0..20).map(|i| format!("item-{i}")).collect();
    let sampler = SingleShotSampler::new(x).unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let batch = sampler.get_examples_with_rng(&mut rng, 0, 50, 1);
    for (feature, label) in batch.iter() {
        assert!((0..20).contains(&label));
        assert_eq!(feature, &format!("item-{label}"));
    }
}

#[test]
fn test_single_shot_sampler_single_element_always_zero() {
    let sampler = SingleShotSampler::new(vec![42.0f32]).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    for num_classes in [1, 3, 16] {
        let batch = sampler.get_examples_with_rng(&mut rng, 0, num_classes, 2);
        assert!(batch.labels().iter().all(|&label| label == 0));
        assert!(batch.features().iter().all(|&x| x == 42.0));
    }
}

#[test]
fn test_single_shot_sampler_example_per_class_ignored() {
    let sampler = SingleShotSampler::new((0..10).collect::<Vec<u8>>()).unwrap();
    let mut rng_a = StdRng::seed_from_u64(99);
    let mut rng_b = StdRng::seed_from_u64(99);
    let a = sampler.get_examples_with_rng(&mut rng_a, 0, 6, 1);
    let b = sampler.get_examples_with_rng(&mut rng_b, 0, 6, 25);
    assert_eq!(a, b);
}

#[test]
fn test_single_shot_sampler_uniform_frequency() {
    let num_elts = 10;
    let draws = 100_000;
    let sampler = SingleShotSampler::new((0..num_elts).collect::<Vec<usize>>()).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);

    let mut counts = vec![0usize; num_elts];
    let batch = sampler.get_examples_with_rng(&mut rng, 0, draws, 1);
    for &label in batch.labels() {
        counts[label as usize] += 1;
    }

    let expected = (draws / num_elts) as f64;
    for count in counts {
        assert_relative_eq!(count as f64, expected, max_relative = 0.2);
    }
}

#[test]
fn test_single_shot_sampler_get_examples_thread_rng() {
    let sampler = SingleShotSampler::new(vec!['x', 'y']).unwrap();
    let batch = sampler.get_examples(3, 8, 4);
    assert_eq!(batch.len(), 8);
    assert!(batch.labels().iter().all(|&label| label == 0 || label == 1));
}

#[test]
fn test_single_shot_sampler_huge_example_per_class_ignored() {
    let sampler = SingleShotSampler::new(vec![1u16, 2, 3]).unwrap();
    let mut rng = StdRng::seed_from_u64(6);
    for example_per_class in [usize::MAX, 1 << 40] {
        let batch = sampler.get_examples_with_rng(&mut rng, 0, 4, example_per_class);
        assert_eq!(batch.len(), 4);
    }
    assert_eq!(sampler.batch_limit(), None);
}

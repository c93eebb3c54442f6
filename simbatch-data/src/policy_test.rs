// simbatch-data/src/policy_test.rs

use super::*;

#[test]
fn test_fixed_policy_from_batch_size() {
    let policy = FixedPolicy::from_batch_size(4, 32).unwrap();
    assert_eq!(policy.num_classes(0, 0), 4);
    assert_eq!(policy.example_per_class(0, 0), 8);
    // Independent of batch position
    assert_eq!(policy.num_classes(99, 7), 4);
    assert_eq!(policy.example_per_class(99, 7), 8);
    assert!(!policy.is_warmup(0));
}

#[test]
fn test_fixed_policy_from_batch_size_floors_at_one() {
    let policy = FixedPolicy::from_batch_size(10, 4).unwrap();
    assert_eq!(policy.example_per_class(0, 0), 1);

    let policy = FixedPolicy::from_batch_size(3, 10).unwrap();
    assert_eq!(policy.example_per_class(0, 0), 3);
}

#[test]
fn test_fixed_policy_zero_classes_is_error() {
    match FixedPolicy::from_batch_size(0, 32) {
        Err(SimBatchError::ConfigurationError(_)) => {}
        other => panic!("Expected ConfigurationError, got {other:?}"),
    }
}

#[test]
fn test_step_policy_grows_every_step() {
    let policy = StepPolicy::new(2, 16, 32, 3, 2.0).unwrap();
    assert_eq!(policy.num_classes(0, 0), 2);
    assert_eq!(policy.num_classes(0, 2), 2);
    assert_eq!(policy.num_classes(0, 3), 4);
    assert_eq!(policy.example_per_class(0, 3), 8);
    assert_eq!(policy.num_classes(0, 6), 8);
    assert_eq!(policy.example_per_class(0, 6), 4);
    // Clamped to max_classes
    assert_eq!(policy.num_classes(0, 30), 16);
    assert_eq!(policy.example_per_class(0, 30), 2);
}

#[test]
fn test_step_policy_shrinks_but_never_below_one() {
    let policy = StepPolicy::new(8, 8, 16, 1, 0.5).unwrap();
    assert_eq!(policy.num_classes(0, 0), 8);
    assert_eq!(policy.num_classes(0, 1), 4);
    assert_eq!(policy.num_classes(0, 2), 2);
    assert_eq!(policy.num_classes(0, 3), 1);
    assert_eq!(policy.num_classes(0, 10), 1);
    assert_eq!(policy.example_per_class(0, 10), 16);
}

#[test]
fn test_step_policy_invalid_arguments() {
    assert!(matches!(
        StepPolicy::new(2, 8, 32, 0, 2.0),
        Err(SimBatchError::ConfigurationError(_))
    ));
    assert!(matches!(
        StepPolicy::new(0, 8, 32, 1, 2.0),
        Err(SimBatchError::ConfigurationError(_))
    ));
    assert!(matches!(
        StepPolicy::new(2, 8, 32, 1, 0.0),
        Err(SimBatchError::ConfigurationError(_))
    ));
    assert!(matches!(
        StepPolicy::new(2, 8, 32, 1, f32::NAN),
        Err(SimBatchError::ConfigurationError(_))
    ));
}

#[test]
fn test_warmup_policy_delegates_and_reports_warmup() {
    let policy = WarmupPolicy::new(FixedPolicy::new(3, 5), 2);
    assert_eq!(policy.warmup_epochs(), 2);
    assert_eq!(policy.num_classes(0, 0), 3);
    assert_eq!(policy.example_per_class(0, 0), 5);
    assert!(policy.is_warmup(0));
    assert!(policy.is_warmup(1));
    assert!(!policy.is_warmup(2));
}

#[test]
fn test_warmup_policy_zero_epochs_never_warm() {
    let policy = WarmupPolicy::new(FixedPolicy::new(3, 5), 0);
    assert!(!policy.is_warmup(0));
}

#[test]
fn test_step_policy_saturates_on_huge_epochs() {
    let growing = StepPolicy::new(2, 16, 32, 1, 2.0).unwrap();
    // 2^32 + 1 steps would wrap to 1 step if narrowed to i32
    assert_eq!(growing.num_classes(0, (1usize << 32) + 1), 16);
    assert_eq!(growing.num_classes(0, usize::MAX), 16);
    assert_eq!(growing.example_per_class(0, usize::MAX), 2);

    let shrinking = StepPolicy::new(8, 8, 16, 1, 0.5).unwrap();
    assert_eq!(shrinking.num_classes(0, (1usize << 32) + 1), 1);
    assert_eq!(shrinking.num_classes(0, usize::MAX), 1);
}

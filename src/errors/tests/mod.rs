use crate::assert_err;
use crate::errors::{ComparisonOperator, OptimError};

#[test]
fn test_error_messages() {
    let err = OptimError::SizeMismatch {
        features: 3,
        labels: 2,
    };
    assert_eq!(err.to_string(), "样本数不一致：特征有3条，标签有2条");

    let err = OptimError::InvalidBatchSize {
        value_name: "batch_size".to_string(),
        operator: ComparisonOperator::LessOrEqual,
        threshold: 100,
        actual: 101,
    };
    assert_eq!(err.to_string(), "batch_size须≤100，实际为101");
}

#[test]
fn test_check_batch_size() {
    assert!(OptimError::check_batch_size("batch_size", 1, Some(1)).is_ok());
    assert!(OptimError::check_batch_size("epoch_length", 1_000_000, None).is_ok());

    assert_err!(
        OptimError::check_batch_size("batch_size", 0, Some(10)),
        OptimError::InvalidBatchSize { operator: ComparisonOperator::GreaterOrEqual, actual: 0, .. }
    );
    assert_err!(
        OptimError::check_batch_size("batch_size", 11, Some(10)),
        OptimError::InvalidBatchSize { operator: ComparisonOperator::LessOrEqual, threshold: 10, actual: 11, .. }
    );
    assert_err!(
        OptimError::check_batch_size("epoch_length", 0, None),
        OptimError::InvalidBatchSize { value_name, .. } if value_name == "epoch_length"
    );
}

#[test]
fn test_check_positive() {
    assert!(OptimError::check_positive("num_epochs", 3).is_ok());
    assert_err!(
        OptimError::check_positive("num_epochs", 0),
        OptimError::ValueMustSatisfyComparison { threshold: 1, .. }
    );
}

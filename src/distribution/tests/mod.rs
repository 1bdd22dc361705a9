use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assert_err;
use crate::distribution::Distribution;
use crate::errors::OptimError;

#[test]
fn test_new_normal_statistics() {
    let mut rng = StdRng::seed_from_u64(42);
    let data = Distribution::new_normal(&mut rng, 1.0, 2.0, 20_001);
    assert_eq!(data.len(), 20_001);
    assert!(data.iter().all(|v| v.is_finite()));

    let n = data.len() as f32;
    let mean = data.iter().sum::<f32>() / n;
    let var = data.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
    assert!((mean - 1.0).abs() < 0.1, "均值偏差过大：{mean}");
    assert!((var.sqrt() - 2.0).abs() < 0.1, "标准差偏差过大：{}", var.sqrt());
}

#[test]
fn test_normal_dataset_shape_and_seed() {
    let mut rng = StdRng::seed_from_u64(7);
    let dataset = Distribution::normal_dataset(&mut rng, 100, 2, 0.0, 1.0).unwrap();
    assert_eq!(dataset.len(), 100);
    assert_eq!(dataset.feature_dim(), 2);

    // 同一种子得到同一份数据
    let mut rng = StdRng::seed_from_u64(7);
    let again = Distribution::normal_dataset(&mut rng, 100, 2, 0.0, 1.0).unwrap();
    assert_eq!(dataset, again);
}

#[test]
fn test_normal_dataset_empty() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_err!(
        Distribution::normal_dataset(&mut rng, 0, 2, 0.0, 1.0),
        OptimError::EmptyList
    );
}

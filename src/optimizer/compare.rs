use ndarray::ArrayView1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use super::{Algorithm, StochasticOptimizer, Trajectory};
use crate::data::Dataset;
use crate::errors::OptimError;
use crate::objective::Objective;

/// 在同一数据上并行运行多个算法，结果按`algorithms`的顺序返回
///
/// 各次运行互不共享可变状态：第`i`个算法使用以`seed + i`播种的独立随机源，
/// 数据集只读共享。任一运行失败则整体返回该错误。
pub fn compare<O: Objective + Sync>(
    objective: &O,
    train: &Dataset,
    test: &Dataset,
    algorithms: &[Algorithm],
    w_init: ArrayView1<'_, f32>,
    seed: u64,
) -> Result<Vec<Trajectory>, OptimError> {
    algorithms
        .par_iter()
        .enumerate()
        .map(|(i, algorithm)| {
            let rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            StochasticOptimizer::new(objective, train, test, rng).run(algorithm, w_init)
        })
        .collect()
}

//! 合成数据
//!
//! 按正态分布抽取训练、测试样本，用于复现实验。优化器核心不依赖本模块。

use ndarray::{Array1, Array2};
use rand::Rng;
use rand::distributions::Open01;

use crate::data::Dataset;
use crate::errors::OptimError;

#[cfg(test)]
mod tests;

pub struct Distribution;

impl Distribution {
    /// 抽取`len`个服从 N(mean, std_dev²) 的数（Box–Muller 变换）
    pub fn new_normal<R: Rng + ?Sized>(
        rng: &mut R,
        mean: f32,
        std_dev: f32,
        len: usize,
    ) -> Vec<f32> {
        let mut data = Vec::with_capacity(len);
        while data.len() < len {
            // Open01 取值于 (0, 1)，ln(u1) 有限
            let u1: f32 = rng.sample(Open01);
            let u2: f32 = rng.sample(Open01);
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f32::consts::PI * u2;
            data.push(mean + std_dev * r * theta.cos());
            if data.len() < len {
                data.push(mean + std_dev * r * theta.sin());
            }
        }
        data
    }

    /// 特征（n × dim）与标签都独立服从 N(mean, std_dev²) 的数据集
    ///
    /// `n == 0` 时返回 `EmptyList`
    pub fn normal_dataset<R: Rng + ?Sized>(
        rng: &mut R,
        n: usize,
        dim: usize,
        mean: f32,
        std_dev: f32,
    ) -> Result<Dataset, OptimError> {
        let features = Array2::from_shape_vec(
            (n, dim),
            Self::new_normal(rng, mean, std_dev, n * dim),
        )
        .map_err(|e| OptimError::Config(e.to_string()))?;
        let labels = Array1::from(Self::new_normal(rng, mean, std_dev, n));
        Dataset::new(features, labels)
    }
}

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use super::Objective;

/// 二次损失 L(w; x, y) = 0.5 · (Σ s_j·w_j·x_j − y)²
///
/// 梯度为解析式 ∂L/∂w_j = r · s_j · x_j，其中 r = Σ s_j·w_j·x_j − y。
/// 两参数情形即 0.5 · (A·w0·x0 + B·w1·x1 − y)²。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticLoss {
    scales: Vec<f32>,
}

impl QuadraticLoss {
    /// 两参数版本，`a`、`b`分别为 A、B
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            scales: vec![a, b],
        }
    }

    /// 任意维数版本，`scales[j]`为第 j 个参数的系数
    pub fn with_scales(scales: Vec<f32>) -> Self {
        Self { scales }
    }

    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    fn residual(&self, w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32) -> f32 {
        self.scales
            .iter()
            .zip(w.iter())
            .zip(x.iter())
            .map(|((s, w), x)| s * w * x)
            .sum::<f32>()
            - y
    }
}

impl Objective for QuadraticLoss {
    fn dim(&self) -> usize {
        self.scales.len()
    }

    fn value(&self, w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32) -> f32 {
        let r = self.residual(w, x, y);
        0.5 * r * r
    }

    fn grad(&self, w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32) -> Array1<f32> {
        let r = self.residual(w, x, y);
        self.scales
            .iter()
            .zip(x.iter())
            .map(|(s, x)| r * s * x)
            .collect()
    }
}

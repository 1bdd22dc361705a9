use ndarray::{Array1, ArrayView1};

use super::Objective;

/// 由调用方注入损失与梯度闭包的目标函数
///
/// # 示例
/// ```ignore
/// let objective = FnObjective::new(
///     1,
///     |w, x, y| 0.5 * (w[0] * x[0] - y).powi(2),
///     |w, x, y| ndarray::array![(w[0] * x[0] - y) * x[0]],
/// );
/// ```
pub struct FnObjective<V, G> {
    dim: usize,
    value_fn: V,
    grad_fn: G,
}

impl<V, G> FnObjective<V, G> {
    pub fn new(dim: usize, value_fn: V, grad_fn: G) -> Self
    where
        V: Fn(ArrayView1<'_, f32>, ArrayView1<'_, f32>, f32) -> f32,
        G: Fn(ArrayView1<'_, f32>, ArrayView1<'_, f32>, f32) -> Array1<f32>,
    {
        Self {
            dim,
            value_fn,
            grad_fn,
        }
    }
}

impl<V, G> Objective for FnObjective<V, G>
where
    V: Fn(ArrayView1<'_, f32>, ArrayView1<'_, f32>, f32) -> f32,
    G: Fn(ArrayView1<'_, f32>, ArrayView1<'_, f32>, f32) -> Array1<f32>,
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn value(&self, w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32) -> f32 {
        (self.value_fn)(w, x, y)
    }

    fn grad(&self, w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32) -> Array1<f32> {
        (self.grad_fn)(w, x, y)
    }
}

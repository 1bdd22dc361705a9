/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 目标函数：单样本的损失与梯度，以及对样本列表的平均
 *
 * 全梯度（SVRG 的 μ̃、SARAH 的 v_0）与训练损失曲线都经由 `average` 计算，
 * 其 O(n) 开销是 SVRG/SARAH 每个 epoch 的主要成本。
 */

mod counting;
mod fn_objective;
mod quadratic;

#[cfg(test)]
mod tests;

use std::ops::{Add, Div};

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::errors::OptimError;

pub use counting::CountingObjective;
pub use fn_objective::FnObjective;
pub use quadratic::QuadraticLoss;

/// 参数向量
pub type Params = Array1<f32>;

/// 可微目标函数
///
/// 梯度可以是解析式，也可以由外部注入的求导能力给出（见 [`FnObjective`]）；
/// 其余部分只要求 `value` 与 `grad` 相互一致。
pub trait Objective {
    /// 参数个数
    fn dim(&self) -> usize;

    /// 参数`w`在单个样本`(x, y)`上的损失，相同输入必须得到相同结果
    fn value(&self, w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32) -> f32;

    /// `value`对`w`的梯度，长度与`w`相同
    fn grad(&self, w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32) -> Array1<f32>;

    /// 对样本列表求`f(w, x_i, y_i)`的算术平均，`f`为`value`或`grad`
    ///
    /// # 错误
    /// - `xs`行数与`ys`长度不一致时返回 `SizeMismatch`，不做任何计算
    /// - 列表为空时返回 `EmptyList`
    ///
    /// 单样本列表的结果与`f(w, xs[0], ys[0])`逐位相同。
    fn average<T, F>(
        &self,
        w: ArrayView1<'_, f32>,
        xs: ArrayView2<'_, f32>,
        ys: ArrayView1<'_, f32>,
        f: F,
    ) -> Result<T, OptimError>
    where
        Self: Sized,
        T: Add<Output = T> + Div<f32, Output = T>,
        F: Fn(&Self, ArrayView1<'_, f32>, ArrayView1<'_, f32>, f32) -> T,
    {
        if xs.nrows() != ys.len() {
            return Err(OptimError::SizeMismatch {
                features: xs.nrows(),
                labels: ys.len(),
            });
        }
        let mut samples = xs.outer_iter().zip(ys.iter());
        let (x0, &y0) = samples.next().ok_or(OptimError::EmptyList)?;
        let sum = samples.fold(f(self, w, x0, y0), |acc, (x, &y)| acc + f(self, w, x, y));
        Ok(sum / ys.len() as f32)
    }

    /// 平均损失
    fn average_value(
        &self,
        w: ArrayView1<'_, f32>,
        xs: ArrayView2<'_, f32>,
        ys: ArrayView1<'_, f32>,
    ) -> Result<f32, OptimError>
    where
        Self: Sized,
    {
        self.average(w, xs, ys, Self::value)
    }

    /// 平均梯度
    fn average_grad(
        &self,
        w: ArrayView1<'_, f32>,
        xs: ArrayView2<'_, f32>,
        ys: ArrayView1<'_, f32>,
    ) -> Result<Array1<f32>, OptimError>
    where
        Self: Sized,
    {
        self.average(w, xs, ys, Self::grad)
    }
}

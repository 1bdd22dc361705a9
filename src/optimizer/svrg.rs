/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : SVRG (Stochastic Variance-Reduced Gradient)
 *
 * Johnson & Zhang, NIPS 2013。每个 epoch 在检查点 w̃ 处计算一次全梯度 μ̃，
 * 内循环用控制变量 ∇f_i(w) − ∇f_i(w̃) + μ̃ 作为 ∇F(w) 的无偏估计。
 */

use std::collections::HashMap;

use log::trace;
use ndarray::{Array1, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::UpdateRule;
use super::rule::{descend, select_checkpoint};
use crate::data::{Dataset, Sampler};
use crate::errors::OptimError;
use crate::objective::{Objective, Params};

/// SVRG 优化器的超参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SVRG {
    /// 学习率
    pub lr: f32,
    /// 外循环（epoch）次数
    pub num_epochs: usize,
    /// 每个 epoch 的内循环步数 m
    pub epoch_length: usize,
}

impl SVRG {
    pub fn new(lr: f32, num_epochs: usize, epoch_length: usize) -> Self {
        Self {
            lr,
            num_epochs,
            epoch_length,
        }
    }
}

impl Default for SVRG {
    fn default() -> Self {
        Self::new(0.01, 100, 10)
    }
}

/// 方差缩减梯度 ĝ = ∇f_i(w) − ∇f_i(w̃) + μ̃
///
/// `anchor_grad`为检查点处同一样本的梯度 ∇f_i(w̃)，`full_grad`为检查点处的全梯度 μ̃。
pub fn svrg_estimate<O: Objective>(
    objective: &O,
    w: ArrayView1<'_, f32>,
    x: ArrayView1<'_, f32>,
    y: f32,
    anchor_grad: &Array1<f32>,
    full_grad: &Array1<f32>,
) -> Array1<f32> {
    objective.grad(w, x, y) - anchor_grad + full_grad
}

impl UpdateRule for SVRG {
    fn name(&self) -> &'static str {
        "SVRG"
    }

    fn learning_rate(&self) -> f32 {
        self.lr
    }

    fn outer_iterations(&self) -> usize {
        self.num_epochs
    }

    fn validate(&self, _train_len: usize) -> Result<(), OptimError> {
        OptimError::check_positive("num_epochs", self.num_epochs)?;
        OptimError::check_batch_size("epoch_length", self.epoch_length, None)
    }

    fn advance<O: Objective, R: Rng + ?Sized>(
        &self,
        objective: &O,
        train: &Dataset,
        checkpoint: &Params,
        rng: &mut R,
    ) -> Result<Params, OptimError> {
        let full_grad =
            objective.average_grad(checkpoint.view(), train.features(), train.labels())?;

        // 检查点在整个 epoch 内固定，∇f_i(w̃) 对同一个 i 只算一次
        let mut anchor_grads: HashMap<usize, Array1<f32>> = HashMap::new();

        let mut candidates = Vec::with_capacity(self.epoch_length + 1);
        candidates.push(checkpoint.clone());
        let mut w = checkpoint.clone();
        for t in 1..=self.epoch_length {
            let i = Sampler::single_index(rng, train.len())?;
            let (x, y) = train.example(i);
            let anchor_grad = anchor_grads
                .entry(i)
                .or_insert_with(|| objective.grad(checkpoint.view(), x, y));
            let estimate = svrg_estimate(objective, w.view(), x, y, anchor_grad, &full_grad);
            w = descend(&w, self.lr, &estimate);
            trace!("SVRG 内循环 t={t}, i={i}, w={w}");
            candidates.push(w.clone());
        }

        select_checkpoint(candidates, rng)
    }
}

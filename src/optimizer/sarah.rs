/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : SARAH (StochAstic Recursive grAdient algoritHm)
 *
 * Nguyen et al., ICML 2017。与 SVRG 一样每个 epoch 从全梯度 v_0 出发，
 * 但之后的估计 v_t 是对前一个迭代点递推修正的（有偏），而非每步都回到固定检查点。
 */

use log::trace;
use ndarray::{Array1, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::UpdateRule;
use super::rule::{descend, select_checkpoint};
use crate::data::{Dataset, Sampler};
use crate::errors::OptimError;
use crate::objective::{Objective, Params};

/// SARAH 优化器的超参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SARAH {
    /// 学习率
    pub lr: f32,
    /// 外循环（epoch）次数
    pub num_epochs: usize,
    /// 每个 epoch 的内循环步数 m
    pub epoch_length: usize,
}

impl SARAH {
    pub fn new(lr: f32, num_epochs: usize, epoch_length: usize) -> Self {
        Self {
            lr,
            num_epochs,
            epoch_length,
        }
    }
}

impl Default for SARAH {
    fn default() -> Self {
        Self::new(0.01, 100, 10)
    }
}

/// 递推梯度估计 v_t = ∇f_i(w_t) − ∇f_i(w_{t-1}) + v_{t-1}
pub fn sarah_estimate<O: Objective>(
    objective: &O,
    w: ArrayView1<'_, f32>,
    w_prev: ArrayView1<'_, f32>,
    x: ArrayView1<'_, f32>,
    y: f32,
    v_prev: &Array1<f32>,
) -> Array1<f32> {
    objective.grad(w, x, y) - objective.grad(w_prev, x, y) + v_prev
}

impl UpdateRule for SARAH {
    fn name(&self) -> &'static str {
        "SARAH"
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
        let mut v = objective.average_grad(checkpoint.view(), train.features(), train.labels())?;

        let mut candidates = Vec::with_capacity(self.epoch_length + 1);
        candidates.push(checkpoint.clone());
        let mut w_prev = checkpoint.clone();
        let mut w = descend(&w_prev, self.lr, &v);
        for t in 1..=self.epoch_length {
            candidates.push(w.clone());
            let i = Sampler::single_index(rng, train.len())?;
            let (x, y) = train.example(i);
            v = sarah_estimate(objective, w.view(), w_prev.view(), x, y, &v);
            let w_next = descend(&w, self.lr, &v);
            trace!("SARAH 内循环 t={t}, i={i}, w={w}");
            w_prev = std::mem::replace(&mut w, w_next);
        }

        select_checkpoint(candidates, rng)
    }
}

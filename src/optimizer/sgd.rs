use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::UpdateRule;
use super::rule::descend;
use crate::data::{Dataset, Sampler};
use crate::errors::OptimError;
use crate::objective::{Objective, Params};

/// 小批量随机梯度下降：θ = θ - α * mean(∇f_i(θ)), i ∈ batch
///
/// 没有内循环，外循环的每一轮就是一步更新。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SGD {
    /// 学习率
    pub lr: f32,
    /// 迭代步数
    pub num_steps: usize,
    /// 每步的小批量大小（无放回抽样）
    pub batch_size: usize,
}

impl SGD {
    pub fn new(lr: f32, num_steps: usize, batch_size: usize) -> Self {
        Self {
            lr,
            num_steps,
            batch_size,
        }
    }
}

impl Default for SGD {
    fn default() -> Self {
        Self::new(0.01, 1000, 1)
    }
}

impl UpdateRule for SGD {
    fn name(&self) -> &'static str {
        "SGD"
    }

    fn learning_rate(&self) -> f32 {
        self.lr
    }

    fn outer_iterations(&self) -> usize {
        self.num_steps
    }

    fn validate(&self, train_len: usize) -> Result<(), OptimError> {
        OptimError::check_positive("num_steps", self.num_steps)?;
        OptimError::check_batch_size("batch_size", self.batch_size, Some(train_len))
    }

    fn advance<O: Objective, R: Rng + ?Sized>(
        &self,
        objective: &O,
        train: &Dataset,
        w: &Params,
        rng: &mut R,
    ) -> Result<Params, OptimError> {
        let indices = Sampler::batch_indices(rng, train.len(), self.batch_size)?;
        trace!("SGD 小批量下标：{indices:?}");
        let batch = train.select(&indices);
        let grad = objective.average_grad(w.view(), batch.features(), batch.labels())?;
        Ok(descend(w, self.lr, &grad))
    }
}

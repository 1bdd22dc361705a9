use log::{debug, info};
use ndarray::ArrayView1;
use rand::Rng;

use super::{SARAH, SGD, SVRG, Trajectory, UpdateRule};
use crate::data::Dataset;
use crate::errors::OptimError;
use crate::objective::Objective;

/// 随机优化器的驱动
///
/// 构造时绑定目标函数、训练集、测试集与随机源；每次运行返回全新的 [`Trajectory`]，
/// 除随机源的推进外不留下任何状态。
///
/// # 使用示例
/// ```ignore
/// let rng = StdRng::seed_from_u64(42);
/// let mut optimizer = StochasticOptimizer::new(&loss, &train, &test, rng);
///
/// let trajectory = optimizer.svrg(w_init.view(), 100, 10, 0.01)?;
/// // 或者按配置运行
/// let trajectory = optimizer.run(&Algorithm::from_json(config)?, w_init.view())?;
/// ```
pub struct StochasticOptimizer<'a, O, R> {
    objective: &'a O,
    train: &'a Dataset,
    test: &'a Dataset,
    rng: R,
}

impl<'a, O: Objective, R: Rng> StochasticOptimizer<'a, O, R> {
    /// 创建优化器
    ///
    /// # 参数
    /// - `objective`: 目标函数
    /// - `train`: 训练集
    /// - `test`: 留出的测试样本（通常只有一个）
    /// - `rng`: 随机源，决定小批量、内循环下标与检查点的抽取
    pub fn new(objective: &'a O, train: &'a Dataset, test: &'a Dataset, rng: R) -> Self {
        Self {
            objective,
            train,
            test,
            rng,
        }
    }

    /// 按给定更新规则运行
    ///
    /// 超参数、初始参数与两个数据集的特征维度在任何损失、梯度计算之前校验。
    /// 学习率不做校验：步长过大导致的发散（乃至 `NaN`）会原样出现在输出序列中。
    pub fn run<U: UpdateRule>(
        &mut self,
        rule: &U,
        w_init: ArrayView1<'_, f32>,
    ) -> Result<Trajectory, OptimError> {
        rule.validate(self.train.len())?;
        // 初始参数与训练集、测试集的特征都须与目标函数同维
        let expected = self.objective.dim();
        for got in [
            w_init.len(),
            self.train.feature_dim(),
            self.test.feature_dim(),
        ] {
            if got != expected {
                return Err(OptimError::DimensionMismatch { expected, got });
            }
        }

        let iterations = rule.outer_iterations();
        info!(
            "{} 开始：lr={}, 外循环{}轮, 训练样本{}个",
            rule.name(),
            rule.learning_rate(),
            iterations,
            self.train.len()
        );

        let mut trajectory = Trajectory::with_capacity(iterations);
        let mut w = w_init.to_owned();
        for k in 0..iterations {
            let test_error =
                self.objective
                    .average_value(w.view(), self.test.features(), self.test.labels())?;
            let training_loss =
                self.objective
                    .average_value(w.view(), self.train.features(), self.train.labels())?;
            debug!(
                "{} 第{k}轮：w={w}, 训练损失={training_loss}, 测试误差={test_error}",
                rule.name()
            );

            let next = rule.advance(self.objective, self.train, &w, &mut self.rng)?;
            trajectory.record(w, training_loss, test_error);
            w = next;
        }

        info!(
            "{} 结束：最终训练损失={:?}",
            rule.name(),
            trajectory.training_loss().last()
        );
        Ok(trajectory)
    }

    /// 小批量 SGD，共`num_steps`步
    pub fn sgd(
        &mut self,
        w_init: ArrayView1<'_, f32>,
        num_steps: usize,
        lr: f32,
        batch_size: usize,
    ) -> Result<Trajectory, OptimError> {
        self.run(&SGD::new(lr, num_steps, batch_size), w_init)
    }

    /// SVRG，共`num_epochs`个 epoch，每个 epoch 内循环`epoch_length`步
    pub fn svrg(
        &mut self,
        w_init: ArrayView1<'_, f32>,
        num_epochs: usize,
        epoch_length: usize,
        lr: f32,
    ) -> Result<Trajectory, OptimError> {
        self.run(&SVRG::new(lr, num_epochs, epoch_length), w_init)
    }

    /// SARAH，共`num_epochs`个 epoch，每个 epoch 内循环`epoch_length`步
    pub fn sarah(
        &mut self,
        w_init: ArrayView1<'_, f32>,
        num_epochs: usize,
        epoch_length: usize,
        lr: f32,
    ) -> Result<Trajectory, OptimError> {
        self.run(&SARAH::new(lr, num_epochs, epoch_length), w_init)
    }
}

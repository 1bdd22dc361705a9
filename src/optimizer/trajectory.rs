use serde::Serialize;

use crate::objective::Params;

/// 一次优化运行的输出：逐检查点的参数、训练损失与测试误差
///
/// 三个序列下标一一对应、长度始终相同；只追加，不修改。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trajectory {
    weights: Vec<Params>,
    training_loss: Vec<f32>,
    test_error: Vec<f32>,
}

impl Trajectory {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: Vec::with_capacity(capacity),
            training_loss: Vec::with_capacity(capacity),
            test_error: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn record(&mut self, w: Params, training_loss: f32, test_error: f32) {
        self.weights.push(w);
        self.training_loss.push(training_loss);
        self.test_error.push(test_error);
    }

    /// 记录点个数
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// 参数轨迹
    pub fn weights(&self) -> &[Params] {
        &self.weights
    }

    /// 训练损失（训练集上的平均损失）
    pub fn training_loss(&self) -> &[f32] {
        &self.training_loss
    }

    /// 测试误差（留出样本上的损失）
    pub fn test_error(&self) -> &[f32] {
        &self.test_error
    }

    /// 拆成 (参数轨迹, 训练损失, 测试误差)
    pub fn into_parts(self) -> (Vec<Params>, Vec<f32>, Vec<f32>) {
        (self.weights, self.training_loss, self.test_error)
    }
}

use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{SARAH, SGD, SVRG};
use crate::data::{Dataset, Sampler};
use crate::errors::OptimError;
use crate::objective::{Objective, Params};

/// 更新规则：给定当前检查点，推进到下一个检查点
///
/// # 设计要点
/// - 每次推进都产生新的参数向量，不就地修改传入的 `w`
/// - 随机源由驱动传入，规则本身不持有随机状态
/// - 超参数校验在任何梯度计算之前完成（见 `validate`）
#[enum_dispatch]
pub trait UpdateRule {
    /// 算法名称
    fn name(&self) -> &'static str;

    /// 获取学习率
    fn learning_rate(&self) -> f32;

    /// 外循环次数，即输出序列的长度
    fn outer_iterations(&self) -> usize;

    /// 根据训练集大小校验超参数
    fn validate(&self, train_len: usize) -> Result<(), OptimError>;

    /// 从检查点`w`出发执行内循环，并选出下一个检查点
    fn advance<O: Objective, R: Rng + ?Sized>(
        &self,
        objective: &O,
        train: &Dataset,
        w: &Params,
        rng: &mut R,
    ) -> Result<Params, OptimError>;
}

/// 可选的优化算法（封闭集合），运行前选定一次
///
/// 序列化时以 `algorithm` 字段区分，例如：
/// ```json
/// {"algorithm": "SVRG", "lr": 0.01, "num_epochs": 100, "epoch_length": 10}
/// ```
#[enum_dispatch(UpdateRule)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm")]
pub enum Algorithm {
    SGD(SGD),
    SVRG(SVRG),
    SARAH(SARAH),
}

impl Algorithm {
    /// 从 JSON 配置解析
    pub fn from_json(json: &str) -> Result<Self, OptimError> {
        serde_json::from_str(json).map_err(|e| OptimError::Config(e.to_string()))
    }

    /// 序列化为 JSON 配置
    pub fn to_json(&self) -> Result<String, OptimError> {
        serde_json::to_string(self).map_err(|e| OptimError::Config(e.to_string()))
    }
}

/// 按名称取默认超参数的算法（名称不区分大小写）
impl FromStr for Algorithm {
    type Err = OptimError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_uppercase().as_str() {
            "SGD" => Ok(SGD::default().into()),
            "SVRG" => Ok(SVRG::default().into()),
            "SARAH" => Ok(SARAH::default().into()),
            _ => Err(OptimError::UnknownAlgorithm(name.to_string())),
        }
    }
}

/// 沿`direction`走一步，返回新的参数向量
pub(super) fn descend(w: &Params, lr: f32, direction: &Array1<f32>) -> Params {
    w - &(direction * lr)
}

/// 在内循环候选 {w_0, …, w_m} 中均匀随机地选出下一个检查点
pub(super) fn select_checkpoint<R: Rng + ?Sized>(
    mut candidates: Vec<Params>,
    rng: &mut R,
) -> Result<Params, OptimError> {
    let pick = Sampler::single_index(rng, candidates.len())?;
    Ok(candidates.swap_remove(pick))
}

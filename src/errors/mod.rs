use thiserror::Error;
mod ops;
pub use self::ops::*;

/// 本库所有可失败操作的统一错误类型
///
/// 数值上的非有限值（`NaN`、溢出）不属于错误：它们会原样进入轨迹、损失和测试误差序列，
/// 由调用方据此判断优化是否发散。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptimError {
    // 特征与标签
    #[error("样本数不一致：特征有{features}条，标签有{labels}条")]
    SizeMismatch { features: usize, labels: usize },

    // 批大小、内循环长度
    #[error("{value_name}须{operator}{threshold}，实际为{actual}")]
    InvalidBatchSize {
        value_name: String,
        operator: ComparisonOperator,
        threshold: usize,
        actual: usize,
    },

    // 迭代步数、epoch数等
    #[error("{value_name}须{operator}{threshold}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: usize,
    },

    #[error("参数维度不匹配：目标函数需要{expected}维，实际为{got}维")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("样本列表为空")]
    EmptyList,

    #[error("未知的优化算法：{0}")]
    UnknownAlgorithm(String),
    #[error("配置解析失败：{0}")]
    Config(String),
}

impl OptimError {
    /// 要求`actual`落在`[1, upper]`内，否则返回`InvalidBatchSize`
    pub(crate) fn check_batch_size(
        value_name: &str,
        actual: usize,
        upper: Option<usize>,
    ) -> Result<(), OptimError> {
        if actual == 0 {
            return Err(OptimError::InvalidBatchSize {
                value_name: value_name.to_string(),
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 1,
                actual,
            });
        }
        match upper {
            Some(upper) if actual > upper => Err(OptimError::InvalidBatchSize {
                value_name: value_name.to_string(),
                operator: ComparisonOperator::LessOrEqual,
                threshold: upper,
                actual,
            }),
            _ => Ok(()),
        }
    }

    pub(crate) fn check_positive(value_name: &str, actual: usize) -> Result<(), OptimError> {
        if actual == 0 {
            Err(OptimError::ValueMustSatisfyComparison {
                value_name: value_name.to_string(),
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 1,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;

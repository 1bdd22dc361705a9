/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : Dataset - 持有特征与标签的样本集
 *
 * 特征为 n × d 矩阵（每行一个样本），标签为长度 n 的向量。
 * 构造后只读，可在多个并发运行之间共享。
 */

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::errors::OptimError;

/// 带标签的样本集
///
/// # 示例
/// ```ignore
/// let dataset = Dataset::new(features, labels)?;
/// let (x, y) = dataset.example(0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f32>,
    labels: Array1<f32>,
}

impl Dataset {
    /// 创建新的 Dataset
    ///
    /// # 参数
    /// - `features`: 特征矩阵，第一维为样本数
    /// - `labels`: 标签向量，长度必须与 `features` 的行数一致
    ///
    /// # 错误
    /// - 行数与标签数不一致时返回 `SizeMismatch`（不会截断到较短的一方）
    /// - 样本数为 0 时返回 `EmptyList`
    pub fn new(features: Array2<f32>, labels: Array1<f32>) -> Result<Self, OptimError> {
        if features.nrows() != labels.len() {
            return Err(OptimError::SizeMismatch {
                features: features.nrows(),
                labels: labels.len(),
            });
        }
        if labels.is_empty() {
            return Err(OptimError::EmptyList);
        }
        Ok(Self { features, labels })
    }

    /// 由单个样本构成的数据集，常用作留出的测试样本
    pub fn single(x: &[f32], y: f32) -> Self {
        let features = Array1::from(x.to_vec()).insert_axis(Axis(0));
        Self {
            features,
            labels: Array1::from(vec![y]),
        }
    }

    /// 由逐行的特征向量与标签构造
    pub fn from_rows(rows: &[Vec<f32>], labels: &[f32]) -> Result<Self, OptimError> {
        if rows.len() != labels.len() {
            return Err(OptimError::SizeMismatch {
                features: rows.len(),
                labels: labels.len(),
            });
        }
        let dim = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
            return Err(OptimError::Config(format!(
                "各行特征长度须一致：首行为{dim}维，第{index}行为{}维",
                row.len()
            )));
        }
        let flat: Vec<f32> = rows.iter().flatten().copied().collect();
        let features = Array2::from_shape_vec((rows.len(), dim), flat)
            .map_err(|e| OptimError::Config(e.to_string()))?;
        Self::new(features, Array1::from(labels.to_vec()))
    }

    /// 获取样本数量
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// 检查数据集是否为空（由构造保证恒为 false，保留以配合 `len`）
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 每个样本的特征维数
    pub fn feature_dim(&self) -> usize {
        self.features.ncols()
    }

    /// 获取特征矩阵视图
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// 获取标签向量视图
    pub fn labels(&self) -> ArrayView1<'_, f32> {
        self.labels.view()
    }

    /// 取第`index`个样本 `(x, y)`
    ///
    /// # Panics
    /// `index >= len()` 时 panic（与切片下标一致）
    pub fn example(&self, index: usize) -> (ArrayView1<'_, f32>, f32) {
        (self.features.row(index), self.labels[index])
    }

    /// 按下标挑出若干样本组成新的数据集（保持下标给出的顺序）
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: self.features.select(Axis(0), indices),
            labels: self.labels.select(Axis(0), indices),
        }
    }
}

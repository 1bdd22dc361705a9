//! 数据模块
//!
//! 提供优化器核心所需的样本容器与随机下标采样。
//!
//! # 主要组件
//!
//! - [`Dataset`]: 按下标寻址的带标签样本集（训练集、测试集共用）
//! - [`Sampler`]: 无状态的下标采样工具（小批量无放回、单下标有放回）
//!
//! # 使用示例
//!
//! ```ignore
//! use stochastic_optim::data::{Dataset, Sampler};
//!
//! let train = Dataset::new(features, labels)?;
//! let batch = Sampler::batch_indices(&mut rng, train.len(), 8)?;
//! let batch = train.select(&batch);
//! ```

mod dataset;
mod sampler;


pub use dataset::Dataset;
pub use sampler::Sampler;

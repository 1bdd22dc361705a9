//! # Stochastic Optim
//!
//! 用纯rust实现并对比三种一阶随机优化算法：小批量随机梯度下降（SGD）、
//! [SVRG](https://papers.nips.cc/paper/4937-accelerating-stochastic-gradient-descent-using-predictive-variance-reduction)
//! 与[SARAH](https://arxiv.org/abs/1703.00102)。
//!
//! 给定可微目标函数、训练集与留出的测试样本，优化器输出可复现的参数轨迹、训练损失与测试误差序列。
//! 样本生成与结果的绘制、落盘都不在核心之内。
//!

pub mod data;
pub mod distribution;
pub mod errors;
pub mod objective;
pub mod optimizer;
pub mod utils;

pub use data::{Dataset, Sampler};
pub use errors::OptimError;
pub use objective::{Objective, Params, QuadraticLoss};
pub use optimizer::{Algorithm, SARAH, SGD, SVRG, StochasticOptimizer, Trajectory, UpdateRule};

/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 随机优化器：SGD、SVRG、SARAH
 *
 * 三种算法共用同一驱动形态：
 *   Init → RecordCheckpoint → InnerStep × m → SelectNextCheckpoint → RecordCheckpoint → … → Done
 * 外循环每轮记录一次检查点（参数、训练损失、测试误差），再交给具体算法的内循环推进到下一个检查点。
 * SGD 的外循环每轮就是一步（m = 1），SVRG/SARAH 的 m 为 epoch_length。
 */

mod compare;
mod driver;
mod rule;
mod sarah;
mod sgd;
mod svrg;
mod trajectory;

#[cfg(test)]
mod tests;

pub use compare::compare;
pub use driver::StochasticOptimizer;
pub use rule::{Algorithm, UpdateRule};
pub use sarah::{SARAH, sarah_estimate};
pub use sgd::SGD;
pub use svrg::{SVRG, svrg_estimate};
pub use trajectory::Trajectory;

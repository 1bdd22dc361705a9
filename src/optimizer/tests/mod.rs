/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - driver: 驱动的共性行为（输出长度、零学习率、校验顺序、可复现性）
 * - sgd / svrg / sarah: 各更新规则，按同一随机种子手工复现一轮并逐位对照
 * - config: 算法选择与 JSON 配置
 * - compare: 多算法并行对比
 */


use approx::assert_abs_diff_eq;
use ndarray::{Array1, array};

use crate::data::Dataset;

/// y = 2·x0 − x1 的无噪声样本，最优解 w* = [2, −1] 处训练损失为 0
fn exact_fit_data() -> Dataset {
    Dataset::new(
        array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, -1.0], [2.0, 1.0]],
        array![2.0, -1.0, 1.0, 3.0, 3.0],
    )
    .unwrap()
}

fn held_out() -> Dataset {
    Dataset::single(&[0.5, 0.5], 0.5)
}

fn assert_params_close(actual: &Array1<f32>, expected: &Array1<f32>, epsilon: f32) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*a, *e, epsilon = epsilon);
    }
}

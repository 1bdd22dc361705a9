/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : FnObjective（注入的求值与求导）测试
 */

use approx::assert_abs_diff_eq;
use ndarray::{ArrayView1, array};

use crate::objective::{FnObjective, Objective, QuadraticLoss};

#[test]
fn test_fn_objective_forwards_to_closures() {
    // 一维最小二乘 0.5 * (w·x - y)²
    let objective = FnObjective::new(
        1,
        |w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32| 0.5 * (w[0] * x[0] - y).powi(2),
        |w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32| array![(w[0] * x[0] - y) * x[0]],
    );
    assert_eq!(objective.dim(), 1);

    let w = array![2.0];
    let x = array![3.0];
    assert_eq!(objective.value(w.view(), x.view(), 1.0), 12.5);
    assert_eq!(objective.grad(w.view(), x.view(), 1.0), array![15.0_f32]);
}

#[test]
fn test_fn_objective_agrees_with_quadratic() {
    let quadratic = QuadraticLoss::new(1.0, 1.0);
    let injected = FnObjective::new(
        2,
        |w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32| {
            0.5 * (w[0] * x[0] + w[1] * x[1] - y).powi(2)
        },
        |w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32| {
            let r = w[0] * x[0] + w[1] * x[1] - y;
            array![r * x[0], r * x[1]]
        },
    );

    let w = array![0.5, -1.5];
    let xs = array![[1.0, 2.0], [-1.0, 0.5], [0.0, 3.0]];
    let ys = array![0.1, -0.2, 0.3];

    assert_abs_diff_eq!(
        injected.average_value(w.view(), xs.view(), ys.view()).unwrap(),
        quadratic.average_value(w.view(), xs.view(), ys.view()).unwrap(),
        epsilon = 1e-6
    );
    assert_eq!(
        injected.average_grad(w.view(), xs.view(), ys.view()).unwrap(),
        quadratic.average_grad(w.view(), xs.view(), ys.view()).unwrap()
    );
}

use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::{Array1, ArrayView1};

use super::Objective;

/// 统计`value`、`grad`调用次数的包装
///
/// 计数器为原子类型，包装后的目标函数仍可在并发运行之间共享。
#[derive(Debug)]
pub struct CountingObjective<O> {
    inner: O,
    value_calls: AtomicUsize,
    grad_calls: AtomicUsize,
}

impl<O: Objective> CountingObjective<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            value_calls: AtomicUsize::new(0),
            grad_calls: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn value_calls(&self) -> usize {
        self.value_calls.load(Ordering::Relaxed)
    }

    pub fn grad_calls(&self) -> usize {
        self.grad_calls.load(Ordering::Relaxed)
    }

    /// 计数清零
    pub fn reset(&self) {
        self.value_calls.store(0, Ordering::Relaxed);
        self.grad_calls.store(0, Ordering::Relaxed);
    }
}

impl<O: Objective> Objective for CountingObjective<O> {
    fn dim(&self) -> usize {
        self.inner.dim()
    }

    fn value(&self, w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32) -> f32 {
        self.value_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.value(w, x, y)
    }

    fn grad(&self, w: ArrayView1<'_, f32>, x: ArrayView1<'_, f32>, y: f32) -> Array1<f32> {
        self.grad_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.grad(w, x, y)
    }
}

use rand::Rng;
use rand::seq::index;

use crate::errors::OptimError;

/// 下标采样工具（无状态）
///
/// 随机源由调用方传入，同一种子下的采样序列可复现。
pub struct Sampler;

impl Sampler {
    /// 从`[0, n)`中无放回地抽取`b`个互不相同的下标，在全部 C(n, b) 个子集上均匀分布
    ///
    /// `b == 0` 或 `b > n` 时返回 `InvalidBatchSize`
    pub fn batch_indices<R: Rng + ?Sized>(
        rng: &mut R,
        n: usize,
        b: usize,
    ) -> Result<Vec<usize>, OptimError> {
        OptimError::check_batch_size("batch_size", b, Some(n))?;
        Ok(index::sample(rng, n, b).into_vec())
    }

    /// 从`[0, n)`中有放回地均匀抽取一个下标，相邻两次调用可能得到同一下标
    pub fn single_index<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<usize, OptimError> {
        if n == 0 {
            return Err(OptimError::EmptyList);
        }
        Ok(rng.gen_range(0..n))
    }
}

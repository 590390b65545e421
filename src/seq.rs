//! Step dataset: sorted values with a fixed gap between neighbors
//! 步进数据集：相邻元素之间有固定间隔的有序值
//!
//! `vals[i] = i * step` leaves an addressable gap after every element, so a
//! miss probe at the gap midpoint is guaranteed absent and in range. Values
//! are `u64`: exact arithmetic, no precision loss at any supported length.
//! `vals[i] = i * step` 在每个元素之后留出可寻址的间隔，间隔中点的未命中探测
//! 必然不存在且在表示范围内。值为 `u64`：精确算术，任何长度下都无精度损失。

use std::ops::Deref;

use crate::{
  error::{Error, Result},
  types::SortedRead,
};

/// Owning sorted dataset with deterministic hit / miss probes
/// 持有数据的有序数据集，提供确定性的命中 / 未命中探测
#[derive(Clone, Debug)]
pub struct StepSeq {
  vals: Vec<u64>,
  step: u64,
}

impl Deref for StepSeq {
  type Target = [u64];

  #[inline]
  fn deref(&self) -> &[u64] {
    &self.vals
  }
}

impl StepSeq {
  /// Build `len` strictly increasing values, `vals[i] = i * step`
  /// 构建 `len` 个严格递增的值，`vals[i] = i * step`
  pub fn new(len: usize, step: u64) -> Result<Self> {
    if step <= 1 {
      return Err(Error::Config(
        "step must be > 1 so a miss probe can sit strictly between two elements",
      ));
    }
    if (len as u64).checked_mul(step).is_none() {
      return Err(Error::Config("len * step overflows u64"));
    }

    let vals = (0..len as u64).map(|i| i * step).collect();
    Ok(Self { vals, step })
  }

  /// Gap width
  /// 间隔宽度
  #[inline]
  #[must_use]
  pub fn step(&self) -> u64 {
    self.step
  }

  /// Underlying sorted slice
  /// 底层有序切片
  #[inline]
  #[must_use]
  pub fn sorted(&self) -> &[u64] {
    &self.vals
  }

  /// Probe equal to `vals[i]`, always present; contract: `i < len`
  /// 等于 `vals[i]` 的探测值，必然命中；约定：`i < len`
  #[inline]
  #[must_use]
  pub fn hit(&self, i: usize) -> u64 {
    i as u64 * self.step
  }

  /// Probe at the midpoint of the gap after `vals[i]`, always absent;
  /// contract: `i < len`
  /// `vals[i]` 之后间隔中点的探测值，必然不命中；约定：`i < len`
  #[inline]
  #[must_use]
  pub fn miss(&self, i: usize) -> u64 {
    i as u64 * self.step + self.step / 2
  }
}

impl SortedRead<u64> for StepSeq {
  #[inline]
  fn len(&self) -> usize {
    self.vals.len()
  }

  #[inline]
  fn get(&self, i: usize) -> u64 {
    <[u64] as SortedRead<u64>>::get(&self.vals, i)
  }
}

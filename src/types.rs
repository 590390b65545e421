//! Element and container traits for the search variants
//! 搜索变体的元素与容器 trait

use std::fmt::Debug;

/// Key trait for supported element types
/// 支持的元素类型约束
pub trait Key: Copy + Send + Sync + Ord + Debug + 'static {}

macro_rules! impl_key {
  ($($t:ty),*) => {
    $(
      impl Key for $t {}
    )*
  };
}

impl_key!(
  u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize
);

/// Random-access read + length: the capability set every variant needs.
/// Any length-known container of strictly increasing keys qualifies.
/// 随机访问读取 + 长度：所有变体所需的能力集合。
/// 任何已知长度、键严格递增的容器都可实现。
pub trait SortedRead<K: Key> {
  /// Element count
  /// 元素数量
  fn len(&self) -> usize;

  #[inline]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Read element at `i`; contract: `i < self.len()`
  /// 读取下标 `i` 处的元素；约定：`i < self.len()`
  fn get(&self, i: usize) -> K;
}

impl<K: Key> SortedRead<K> for [K] {
  #[inline]
  fn len(&self) -> usize {
    <[K]>::len(self)
  }

  #[inline]
  fn get(&self, i: usize) -> K {
    // SAFETY: callers uphold i < len(); every variant only narrows within [0, len).
    unsafe { *self.get_unchecked(i) }
  }
}

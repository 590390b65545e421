//! Search variants over a sorted random-access sequence
//! 有序随机访问序列上的搜索变体
//!
//! Every boolean variant shares one observable contract: `true` iff the probe
//! value appears in the sequence. They differ only in narrowing strategy.
//! 所有布尔变体共享同一可观察契约：当且仅当探测值存在时返回 `true`，区别仅在收缩策略。

use crate::types::{Key, SortedRead};

/// Classic bisection: lower-bound then check, same algorithm as the standard library
/// 经典二分：先 lower-bound 再校验，与标准库同一算法
pub fn binary_search<K: Key, S: SortedRead<K> + ?Sized>(s: &S, value: K) -> bool {
  let mut begin = 0usize;
  let mut count = s.len();

  // narrow the half-open candidate range [begin, begin + count)
  // 收缩半开候选区间 [begin, begin + count)
  while count > 0 {
    let half = count >> 1;
    if s.get(begin + half) < value {
      // value is right of the pivot
      begin += half + 1;
      count -= half + 1;
    } else {
      // value is left of the pivot, or is the pivot
      count = half;
    }
  }

  begin < s.len() && s.get(begin) == value
}

/// Same narrowing as [`binary_search`], but tests equality at the top of
/// every iteration and returns on the first match
/// 与 [`binary_search`] 相同的收缩，但每轮先做相等比较，命中立即返回
pub fn binary_search_with_equality_test<K: Key, S: SortedRead<K> + ?Sized>(
  s: &S,
  value: K,
) -> bool {
  let mut begin = 0usize;
  let mut count = s.len();

  while count > 0 {
    let half = count >> 1;
    let mid = s.get(begin + half);

    if value == mid {
      return true;
    }

    if mid < value {
      begin += half + 1;
      count -= half + 1;
    } else {
      count = half;
    }
  }

  false
}

/// Same halving expressed as recursion over a half-open index range,
/// depth O(log n)
/// 同样的折半逻辑以半开下标区间上的递归表达，深度 O(log n)
pub fn binary_search_recursive<K: Key, S: SortedRead<K> + ?Sized>(s: &S, value: K) -> bool {
  fn go<K: Key, S: SortedRead<K> + ?Sized>(s: &S, begin: usize, end: usize, value: K) -> bool {
    if begin == end {
      return false;
    }

    let count = end - begin;
    if count == 1 {
      return s.get(begin) == value;
    }

    let mid = begin + (count >> 1);
    if value < s.get(mid) {
      go(s, begin, mid, value)
    } else {
      go(s, mid, end, value)
    }
  }

  go(s, 0, s.len(), value)
}

/// Linear scan, position of the first match
/// 线性扫描，返回首个命中的位置
pub fn find<K: Key, S: SortedRead<K> + ?Sized>(s: &S, value: K) -> Option<usize> {
  for i in 0..s.len() {
    if s.get(i) == value {
      return Some(i);
    }
  }
  None
}

/// Linear scan exploiting order: skip while smaller, then one equality test
/// 利用有序性的线性扫描：跳过较小元素后只做一次相等比较
pub fn find_sorted<K: Key, S: SortedRead<K> + ?Sized>(s: &S, value: K) -> Option<usize> {
  let n = s.len();
  let mut i = 0;
  while i < n && s.get(i) < value {
    i += 1;
  }
  if i < n && s.get(i) == value { Some(i) } else { None }
}

/// Bisect while more than `threshold` candidates remain, then finish with the
/// sorted linear scan; `threshold == 0` degenerates to [`binary_search`]
/// 候选数量超过 `threshold` 时折半，之后改用有序线性扫描收尾；
/// `threshold == 0` 退化为 [`binary_search`]
pub fn binary_search_hybrid<K: Key, S: SortedRead<K> + ?Sized>(
  s: &S,
  value: K,
  threshold: usize,
) -> bool {
  let n = s.len();
  let mut begin = 0usize;
  let mut count = n;

  while count > threshold {
    let half = count >> 1;
    if s.get(begin + half) < value {
      begin += half + 1;
      count -= half + 1;
    } else {
      count = half;
    }
  }

  // invariant from narrowing: everything left of begin is < value,
  // everything past the residual range is >= value
  // 收缩后的不变量：begin 左侧均 < value，残余区间之后均 >= value
  while begin < n && s.get(begin) < value {
    begin += 1;
  }
  begin < n && s.get(begin) == value
}

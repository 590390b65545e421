//! Linear scan contenders, baselines for small sequences
//! 线性扫描竞争者，小序列基线

use jdb_bisect::{StepSeq, find, find_sorted};

use crate::bench_common::Searchable;

pub struct Find;

impl Searchable for Find {
  const NAME: &'static str = "find";

  fn build(_threshold: Option<usize>) -> Self {
    Self
  }

  #[inline]
  fn query(&self, seq: &StepSeq, value: u64) -> bool {
    find(seq, value).is_some()
  }
}

pub struct FindSorted;

impl Searchable for FindSorted {
  const NAME: &'static str = "find_sorted";

  fn build(_threshold: Option<usize>) -> Self {
    Self
  }

  #[inline]
  fn query(&self, seq: &StepSeq, value: u64) -> bool {
    find_sorted(seq, value).is_some()
  }
}

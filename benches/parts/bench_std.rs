//! std slice::binary_search baseline
//! 标准库 slice::binary_search 基线

use jdb_bisect::StepSeq;

use crate::bench_common::Searchable;

pub struct Std;

impl Searchable for Std {
  const NAME: &'static str = "std";

  fn build(_threshold: Option<usize>) -> Self {
    Self
  }

  #[inline]
  fn query(&self, seq: &StepSeq, value: u64) -> bool {
    seq.sorted().binary_search(&value).is_ok()
  }
}

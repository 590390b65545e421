//! Sorted-slice search variants with a correctness-auditing benchmark
//! 有序切片搜索变体及其正确性校验基准
//!
//! Six ways of answering "does `v` appear in this sorted sequence?", all
//! generic over a random-access read capability, audited and timed against
//! the standard library's `binary_search` under identical probe loads.
//! 六种回答「v 是否出现在这个有序序列中」的方式，均以随机访问读取能力为泛型约束，
//! 并在相同的探测负载下与标准库 `binary_search` 对比校验与计时。

pub mod audit;
pub mod consts;
pub mod error;
pub mod search;
pub mod seq;
pub mod types;

pub use self::{
  error::{Error, Result},
  search::{
    binary_search, binary_search_hybrid, binary_search_recursive,
    binary_search_with_equality_test, find, find_sorted,
  },
  seq::StepSeq,
  types::{Key, SortedRead},
};

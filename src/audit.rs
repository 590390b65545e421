//! Correctness-auditing wall-clock benchmark driver
//! 校验正确性的实测耗时基准驱动
//!
//! Each variant gets one timed pass over the full probe load: a hit and a
//! miss probe per element. Mismatches are printed as `error @<value>` lines
//! and counted, never fatal, so timing for the rest of the pass survives.
//! 每个变体在完整探测负载上计时一轮：每个元素一次命中加一次未命中探测。
//! 不一致会以 `error @<value>` 行打印并计数，但不会中断，剩余部分的计时仍然有效。

use std::time::{Duration, Instant};

use log::info;

use crate::{
  consts::SCAN_LIMIT,
  search::{
    binary_search, binary_search_hybrid, binary_search_recursive,
    binary_search_with_equality_test, find, find_sorted,
  },
  seq::StepSeq,
};

/// One variant's timed pass
/// 单个变体的计时结果
#[derive(Clone, Debug)]
pub struct Report {
  pub name: &'static str,
  pub elapsed: Duration,
  pub errors: usize,
}

impl Report {
  /// Elapsed milliseconds, fractional
  /// 耗时毫秒数，保留小数
  #[inline]
  #[must_use]
  pub fn ms(&self) -> f64 {
    self.elapsed.as_secs_f64() * 1000.0
  }
}

/// Audit every variant over the full hit + miss pass, std baseline first.
/// The two linear scans only run when the sequence is small enough for their
/// quadratic total cost not to drown everything else.
/// 以 std 基线开始，对每个变体做完整的命中 + 未命中校验。
/// 两个线性扫描仅在序列足够小、其平方级总开销不至于淹没其余结果时运行。
pub fn run(seq: &StepSeq, threshold: usize) -> Vec<Report> {
  let mut li = vec![
    pass("std", seq, |s, v| s.sorted().binary_search(&v).is_ok()),
    pass("binary_search", seq, |s, v| binary_search(s, v)),
    pass("binary_search_with_equality_test", seq, |s, v| {
      binary_search_with_equality_test(s, v)
    }),
    pass("binary_search_recursive", seq, |s, v| {
      binary_search_recursive(s, v)
    }),
  ];

  if seq.len() <= SCAN_LIMIT {
    li.push(pass("find", seq, |s, v| find(s, v).is_some()));
    li.push(pass("find_sorted", seq, |s, v| find_sorted(s, v).is_some()));
  }

  li.push(pass("binary_search_hybrid", seq, move |s, v| {
    binary_search_hybrid(s, v, threshold)
  }));

  li
}

/// Timed hit + miss pass for one variant
/// 单个变体的命中 + 未命中计时轮
fn pass(
  name: &'static str,
  seq: &StepSeq,
  search: impl Fn(&StepSeq, u64) -> bool,
) -> Report {
  info!("{name}: auditing {} probes", seq.len() * 2);

  let begin = Instant::now();
  let mut errors = 0usize;

  for i in 0..seq.len() {
    let hit = seq.hit(i);
    if !search(seq, hit) {
      errors += 1;
      println!("error @{hit}");
    }

    let miss = seq.miss(i);
    if search(seq, miss) {
      errors += 1;
      println!("error @{miss}");
    }
  }

  Report {
    name,
    elapsed: begin.elapsed(),
    errors,
  }
}

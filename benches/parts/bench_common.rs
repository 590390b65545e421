use std::hint::black_box;

use criterion::{BenchmarkId, measurement::WallTime};
use jdb_bisect::StepSeq;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub const SEED: u64 = 42;

/// Trait for benchmark contenders
/// 基准竞争者的特征
pub trait Searchable: Sized {
  const NAME: &'static str;

  fn build(threshold: Option<usize>) -> Self;
  fn query(&self, seq: &StepSeq, value: u64) -> bool;

  fn bench_name(threshold: Option<usize>) -> String {
    if let Some(t) = threshold {
      format!("{}_{}", Self::NAME, t)
    } else {
      Self::NAME.to_string()
    }
  }
}

/// Shuffled probe mix: half hits, half gap-midpoint misses
/// 打乱顺序的探测混合：一半命中，一半间隔中点未命中
#[inline]
pub fn gen_probes(seq: &StepSeq, count: usize) -> Vec<u64> {
  let mut rng = StdRng::seed_from_u64(SEED);
  (0..count)
    .map(|_| {
      let i = rng.random_range(0..seq.len());
      if rng.random_bool(0.5) {
        seq.hit(i)
      } else {
        seq.miss(i)
      }
    })
    .collect()
}

/// Benchmark query time for a given contender
/// 对给定竞争者的查询时间进行基准测试
pub fn bench_query_impl<T: Searchable>(
  group: &mut criterion::BenchmarkGroup<WallTime>,
  seq: &StepSeq,
  probes: &[u64],
  input_value: usize,
  threshold: Option<usize>,
) {
  let contender = T::build(threshold);
  group.bench_with_input(
    BenchmarkId::new(T::bench_name(threshold), input_value),
    &(seq, probes),
    |b, (seq, probes)| {
      b.iter(|| {
        for &p in probes.iter() {
          black_box(contender.query(seq, p));
        }
      })
    },
  );
}

//! Benchmark entry point: builds the dataset once, audits every variant,
//! prints one timing line each
//! 基准入口：构建一次数据集，校验每个变体，逐个输出计时行

use jdb_bisect::{
  Result, StepSeq, audit,
  consts::{NUM_ELEMENTS, STEP, THRESHOLD},
};
use log::info;

fn main() -> Result<()> {
  log_init::init();

  let seq = StepSeq::new(NUM_ELEMENTS, STEP)?;
  info!(
    "dataset: {} elements, step {}, hybrid threshold {THRESHOLD}",
    seq.len(),
    seq.step()
  );

  for r in audit::run(&seq, THRESHOLD) {
    println!("{}: {:.3}ms", r.name, r.ms());
  }

  Ok(())
}

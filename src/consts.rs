//! Default benchmark configuration
//! 默认基准配置

/// Default sequence length
/// 默认序列长度
pub const NUM_ELEMENTS: usize = 1_000_000;

/// Default gap between neighboring elements, must be > 1
/// 相邻元素之间的默认间隔，必须 > 1
pub const STEP: u64 = 10;

/// Default hybrid switch-to-linear-scan cutoff
/// 混合变体切换到线性扫描的默认阈值
pub const THRESHOLD: usize = 8;

/// Max sequence length at which the linear scan variants are audited
/// 线性扫描变体参与校验的最大序列长度
pub const SCAN_LIMIT: usize = 10_000;

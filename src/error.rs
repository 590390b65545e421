use thiserror::Error;

/// Crate specialized Result type.
/// 本 crate 专用的 Result 类型。
pub type Result<T> = std::result::Result<T, Error>;

/// Crate Error Enum.
/// 本 crate 的错误枚举。
#[derive(Error, Debug)]
pub enum Error {
  /// Dataset configuration rejected before any timing happens.
  /// 数据集配置在任何计时发生之前被拒绝。
  #[error("config error: {0}")]
  Config(&'static str),
}

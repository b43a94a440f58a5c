//! 日志初始化模块
//!
//! 基于 tracing-subscriber，日志级别由 RUST_LOG 控制，默认 info

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// # 参数
/// - `verbose`: 为 true 时默认级别提升为 debug
///
/// 重复调用是安全的，后续调用会被忽略
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

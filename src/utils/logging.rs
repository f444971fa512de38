//! # 日志初始化
//!
//! 使用 `tracing-subscriber` 把诊断日志写到标准错误，
//! 级别由 `RUST_LOG` 控制，默认只输出警告。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "boinkgen=warn";

/// 初始化全局日志订阅者；重复初始化时静默忽略
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

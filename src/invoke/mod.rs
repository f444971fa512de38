//! # 外部解析器调用模块
//!
//! 封装对 Boink 可执行文件 `parse` 命令的调用。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 与 `commands/generate.rs` 使用
//! - 子模块: executable, artifact

pub mod artifact;
pub mod executable;

pub use artifact::{artifact_path, is_up_to_date};
pub use executable::ParserExecutable;

use crate::error::Result;
use crate::models::Invocation;
use std::path::Path;

/// 为单个脚本生成解析树的外部解析器
///
/// 实现者同步执行一次解析并返回捕获的输出；非零退出码不是 `Err`，
/// 只有命令无法启动时才返回错误。
pub trait ScriptParser {
    fn parse(&self, script: &Path, out_dir: &Path) -> Result<Invocation>;
}

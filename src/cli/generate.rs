//! # generate 参数定义
//!
//! 批量调用 Boink 可执行文件，为 test-scripts 目录中的每个 `.boink`
//! 脚本生成解析树。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 外部命令失败时的处理策略
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report each failure, keep going, exit non-zero at the end
    #[default]
    Warn,
    /// Stop at the first failed invocation
    Abort,
    /// Count failures but exit successfully
    Ignore,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Warn => write!(f, "warn"),
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Ignore => write!(f, "ignore"),
        }
    }
}

/// generate 参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Echo the captured output of each parser invocation to stdout
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Directory containing the test scripts
    #[arg(short, long, env = "BOINKGEN_DIR", default_value = "test-scripts")]
    pub dir: PathBuf,

    /// Directory the parse trees are written to (defaults to --dir)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Boink executable implementing the `parse` command
    #[arg(short, long, env = "BOINKGEN_EXE", default_value = "boinkmain")]
    pub exe: PathBuf,

    /// Program the executable is run through (e.g. 'dotnet', 'powershell')
    #[arg(long, env = "BOINKGEN_LAUNCHER")]
    pub launcher: Option<String>,

    /// Extension of the test scripts
    #[arg(long, default_value = "boink")]
    pub extension: String,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// What to do when an invocation fails
    #[arg(long, value_enum, default_value_t = FailurePolicy::Warn)]
    pub on_failure: FailurePolicy,

    /// Skip scripts whose parse tree is newer than the script
    #[arg(long, default_value_t = false)]
    pub skip_up_to_date: bool,

    /// Only list the invocations that would run
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Write a CSV report of every processed script
    #[arg(long)]
    pub report: Option<PathBuf>,
}

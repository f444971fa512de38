//! # 生成器配置
//!
//! 一次批量生成所需的全部设置，由命令行参数转换而来。
//!
//! ## 依赖关系
//! - 由 `commands/generate.rs` 从 `cli/generate.rs` 的参数构建
//! - 被 `batch/runner.rs` 使用

use crate::cli::generate::{FailurePolicy, GenerateArgs};
use crate::error::{GenError, Result};

use std::path::{Path, PathBuf};

/// 批量生成配置
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 测试脚本目录
    pub scripts_dir: PathBuf,
    /// 解析树输出目录；为空时与脚本目录相同
    pub out_dir: Option<PathBuf>,
    /// Boink 可执行文件
    pub executable: PathBuf,
    /// 启动器
    pub launcher: Option<String>,
    /// 脚本扩展名（不含点）
    pub extension: String,
    /// 是否回显外部命令的标准输出
    pub verbose: bool,
    pub on_failure: FailurePolicy,
    pub skip_up_to_date: bool,
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            scripts_dir: PathBuf::from("test-scripts"),
            out_dir: None,
            executable: PathBuf::from("boinkmain"),
            launcher: None,
            extension: "boink".to_string(),
            verbose: false,
            on_failure: FailurePolicy::Warn,
            skip_up_to_date: false,
            dry_run: false,
        }
    }
}

impl From<&GenerateArgs> for GeneratorConfig {
    fn from(args: &GenerateArgs) -> Self {
        GeneratorConfig {
            scripts_dir: args.dir.clone(),
            out_dir: args.out_dir.clone(),
            executable: args.exe.clone(),
            launcher: args.launcher.clone(),
            extension: args.extension.trim_start_matches('.').to_string(),
            verbose: args.verbose,
            on_failure: args.on_failure,
            skip_up_to_date: args.skip_up_to_date,
            dry_run: args.dry_run,
        }
    }
}

impl GeneratorConfig {
    /// 解析树输出目录
    pub fn out_dir(&self) -> &Path {
        self.out_dir.as_deref().unwrap_or(&self.scripts_dir)
    }

    /// 脚本文件名后缀，如 `.boink`
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }

    /// 检查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(GenError::InvalidArgument(
                "--extension must not be empty".to_string(),
            ));
        }
        if self.extension.contains(['/', '\\']) {
            return Err(GenError::InvalidArgument(format!(
                "--extension '{}' must not contain path separators",
                self.extension
            )));
        }
        if self.executable.as_os_str().is_empty() {
            return Err(GenError::InvalidArgument(
                "--exe must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

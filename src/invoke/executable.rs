//! # Boink 可执行文件
//!
//! 以 `[launcher] <exe> parse <script> <out_dir>` 的形式同步运行外部解析器，
//! 分别捕获退出码、标准输出和标准错误。
//!
//! ## 依赖关系
//! - 实现 `invoke::ScriptParser`
//! - 使用 `models/invocation.rs`

use super::ScriptParser;
use crate::error::{GenError, Result};
use crate::models::Invocation;

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// `parse` 子命令名
pub const PARSE_COMMAND: &str = "parse";

/// 外部 Boink 可执行文件
#[derive(Debug, Clone)]
pub struct ParserExecutable {
    /// 可执行文件路径
    program: PathBuf,
    /// 启动器及其参数（如 `dotnet`、`powershell -NoProfile`）
    launcher: Vec<String>,
}

impl ParserExecutable {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            launcher: Vec::new(),
        }
    }

    /// 设置启动器，按空白拆分为程序与前置参数
    pub fn with_launcher(mut self, launcher: Option<&str>) -> Self {
        self.launcher = launcher
            .map(|l| l.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        self
    }

    /// 组装实际启动的程序与参数列表
    pub fn argv(&self, script: &Path, out_dir: &Path) -> (OsString, Vec<OsString>) {
        let mut args: Vec<OsString> = Vec::new();

        let program = match self.launcher.split_first() {
            Some((launcher, launcher_args)) => {
                args.extend(launcher_args.iter().map(OsString::from));
                args.push(self.program.clone().into_os_string());
                OsString::from(launcher)
            }
            None => self.program.clone().into_os_string(),
        };

        args.push(OsString::from(PARSE_COMMAND));
        args.push(script.as_os_str().to_os_string());
        args.push(out_dir.as_os_str().to_os_string());

        (program, args)
    }

    /// 用于显示的命令行
    pub fn command_line(&self, script: &Path, out_dir: &Path) -> String {
        let (program, args) = self.argv(script, out_dir);
        std::iter::once(program)
            .chain(args)
            .map(|s| s.to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ScriptParser for ParserExecutable {
    fn parse(&self, script: &Path, out_dir: &Path) -> Result<Invocation> {
        let (program, args) = self.argv(script, out_dir);
        let command = self.command_line(script, out_dir);

        tracing::debug!(%command, "invoking parser");

        let output = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => GenError::CommandNotFound {
                    command: program.to_string_lossy().to_string(),
                },
                _ => GenError::CommandSpawnError {
                    command: command.clone(),
                    source: e,
                },
            })?;

        tracing::debug!(%command, status = ?output.status.code(), "parser exited");

        Ok(Invocation::new(command, output.status.code())
            .with_stdout(output.stdout)
            .with_stderr(output.stderr))
    }
}

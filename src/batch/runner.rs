//! # 批量执行器
//!
//! 依次为每个脚本调用外部解析器。
//!
//! ## 功能
//! - 严格顺序执行，每次调用结束后才开始下一次
//! - 可选回显外部命令的标准输出
//! - 按失败策略处理失败的调用
//! - 进度条显示与结果汇总
//!
//! ## 依赖关系
//! - 被 `batch::run` 与 `commands/generate.rs` 调用
//! - 使用 `invoke/` 执行外部命令
//! - 使用 `utils/progress.rs` 创建进度条

use super::config::GeneratorConfig;
use crate::cli::generate::FailurePolicy;
use crate::error::{GenError, Result};
use crate::invoke::{artifact_path, is_up_to_date, ScriptParser};
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 单个脚本的处理状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 解析成功
    Success,
    /// 跳过（解析树已是最新）
    Skipped,
    /// 调用失败
    Failed(String),
}

/// 单个脚本的处理结果
#[derive(Debug, Clone)]
pub struct ProcessResult {
    pub script: PathBuf,
    pub artifact: PathBuf,
    pub exit_code: Option<i32>,
    pub outcome: Outcome,
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情 (脚本路径, 错误信息)
    pub failures: Vec<(String, String)>,
    /// 按处理顺序排列的全部结果
    pub results: Vec<ProcessResult>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match &result.outcome {
            Outcome::Success => self.success += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed(err) => {
                self.failed += 1;
                self.failures
                    .push((result.script.display().to_string(), err.clone()));
            }
        }
        self.results.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// 批量执行器
pub struct BatchRunner<'a, P: ScriptParser> {
    config: &'a GeneratorConfig,
    parser: &'a P,
}

impl<'a, P: ScriptParser> BatchRunner<'a, P> {
    /// 创建新的批量执行器
    pub fn new(config: &'a GeneratorConfig, parser: &'a P) -> Self {
        Self { config, parser }
    }

    /// 顺序处理脚本列表
    ///
    /// `echo` 接收回显的标准输出。`abort` 策略下第一次失败即返回错误，
    /// 其余策略下失败记录在返回的 `BatchResult` 中。
    pub fn run<W: Write>(&self, scripts: Vec<PathBuf>, echo: &mut W) -> Result<BatchResult> {
        let out_dir = self.config.out_dir();

        // 回显时不绘制进度条，避免与输出交错
        let pb = if self.config.verbose {
            ProgressBar::hidden()
        } else {
            progress::create_progress_bar(scripts.len() as u64, "Parsing")
        };

        let mut batch_result = BatchResult::default();

        for script in scripts {
            let result = match self.process(&script, out_dir, echo, &pb) {
                Ok(result) => result,
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            };
            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();

        Ok(batch_result)
    }

    /// 处理单个脚本
    fn process<W: Write>(
        &self,
        script: &Path,
        out_dir: &Path,
        echo: &mut W,
        pb: &ProgressBar,
    ) -> Result<ProcessResult> {
        let artifact = artifact_path(script, out_dir);
        let mut result = ProcessResult {
            script: script.to_path_buf(),
            artifact: artifact.clone(),
            exit_code: None,
            outcome: Outcome::Success,
        };

        if self.config.skip_up_to_date && is_up_to_date(script, &artifact) {
            tracing::debug!(script = %script.display(), "parse tree up to date");
            result.outcome = Outcome::Skipped;
            return Ok(result);
        }

        if let Some(name) = script.file_name() {
            pb.set_message(name.to_string_lossy().to_string());
        }

        let failure = match self.parser.parse(script, out_dir) {
            Ok(invocation) => {
                result.exit_code = invocation.exit_code;

                if self.config.verbose {
                    echo.write_all(&invocation.stdout)
                        .and_then(|_| echo.flush())
                        .map_err(GenError::OutputError)?;
                } else {
                    tracing::trace!(stdout = %invocation.stdout_text(), "parser output");
                }

                if invocation.success() {
                    if !artifact.exists() {
                        tracing::warn!(
                            script = %script.display(),
                            artifact = %artifact.display(),
                            "parser succeeded but wrote no parse tree"
                        );
                    }
                    return Ok(result);
                }

                GenError::CommandFailed {
                    command: invocation.command.clone(),
                    status: invocation.status_text(),
                    stderr: invocation.stderr_text().trim_end().to_string(),
                }
            }
            Err(e) => e,
        };

        match self.config.on_failure {
            FailurePolicy::Abort => Err(failure),
            FailurePolicy::Warn => {
                pb.suspend(|| {
                    output::print_warning(&format!(
                        "Failed to parse {}: {}",
                        script.display(),
                        failure
                    ))
                });
                result.outcome = Outcome::Failed(failure.to_string());
                Ok(result)
            }
            FailurePolicy::Ignore => {
                tracing::debug!(script = %script.display(), error = %failure, "ignoring failure");
                result.outcome = Outcome::Failed(failure.to_string());
                Ok(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch;
    use crate::models::Invocation;
    use std::cell::RefCell;
    use std::fs;

    /// 记录调用参数的假解析器
    #[derive(Default)]
    struct RecordingParser {
        calls: RefCell<Vec<(PathBuf, PathBuf)>>,
        failing: Vec<&'static str>,
        missing: bool,
    }

    impl ScriptParser for RecordingParser {
        fn parse(&self, script: &Path, out_dir: &Path) -> Result<Invocation> {
            self.calls
                .borrow_mut()
                .push((script.to_path_buf(), out_dir.to_path_buf()));

            if self.missing {
                return Err(GenError::CommandNotFound {
                    command: "boinkmain".to_string(),
                });
            }

            let name = script.file_name().unwrap().to_string_lossy().to_string();
            let command = format!("boinkmain parse {} {}", script.display(), out_dir.display());
            if self.failing.contains(&name.as_str()) {
                return Ok(Invocation::new(command, Some(1))
                    .with_stdout(format!("bad {}\n", name))
                    .with_stderr("Unexpected token"));
            }

            fs::write(artifact_path(script, out_dir), "{}").unwrap();
            Ok(Invocation::new(command, Some(0)).with_stdout(format!("wrote {}\n", name)))
        }
    }

    fn scripts_dir(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(name), "int x = 1").unwrap();
        }
        dir
    }

    fn config_for(dir: &Path) -> GeneratorConfig {
        GeneratorConfig {
            scripts_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_invokes_only_matching_scripts() {
        let dir = scripts_dir(&["a.boink", "b.boink", "readme.txt"]);
        let parser = RecordingParser::default();
        let mut echo = Vec::new();

        let result = batch::run(&config_for(dir.path()), &parser, &mut echo).unwrap();

        assert_eq!(
            *parser.calls.borrow(),
            vec![
                (dir.path().join("a.boink"), dir.path().to_path_buf()),
                (dir.path().join("b.boink"), dir.path().to_path_buf()),
            ]
        );
        assert_eq!(result.success, 2);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_quiet_run_echoes_nothing() {
        let dir = scripts_dir(&["a.boink", "b.boink"]);
        let parser = RecordingParser::default();
        let mut echo = Vec::new();

        batch::run(&config_for(dir.path()), &parser, &mut echo).unwrap();
        assert!(echo.is_empty());
    }

    #[test]
    fn test_verbose_echoes_output_in_order() {
        let dir = scripts_dir(&["b.boink", "a.boink"]);
        let parser = RecordingParser {
            failing: vec!["b.boink"],
            ..Default::default()
        };
        let config = GeneratorConfig {
            verbose: true,
            on_failure: FailurePolicy::Ignore,
            ..config_for(dir.path())
        };
        let mut echo = Vec::new();

        batch::run(&config, &parser, &mut echo).unwrap();
        assert_eq!(String::from_utf8(echo).unwrap(), "wrote a.boink\nbad b.boink\n");
    }

    #[test]
    fn test_empty_directory() {
        let dir = scripts_dir(&[]);
        let parser = RecordingParser::default();
        let mut echo = Vec::new();

        let result = batch::run(&config_for(dir.path()), &parser, &mut echo).unwrap();
        assert_eq!(result.total(), 0);
        assert!(parser.calls.borrow().is_empty());
        assert!(echo.is_empty());
    }

    #[test]
    fn test_missing_directory_invokes_nothing() {
        let dir = scripts_dir(&[]);
        let parser = RecordingParser::default();
        let mut echo = Vec::new();

        let err = batch::run(&config_for(&dir.path().join("gone")), &parser, &mut echo)
            .unwrap_err();
        assert!(matches!(err, GenError::DirectoryNotFound { .. }));
        assert!(parser.calls.borrow().is_empty());
    }

    #[test]
    fn test_out_dir_is_passed_through() {
        let dir = scripts_dir(&["a.boink"]);
        let out = tempfile::tempdir().unwrap();
        let parser = RecordingParser::default();
        let config = GeneratorConfig {
            out_dir: Some(out.path().to_path_buf()),
            ..config_for(dir.path())
        };

        let result = batch::run(&config, &parser, &mut Vec::new()).unwrap();
        assert_eq!(parser.calls.borrow()[0].1, out.path().to_path_buf());
        assert_eq!(result.results[0].artifact, out.path().join("a.json"));
        assert!(out.path().join("a.json").exists());
    }

    #[test]
    fn test_abort_stops_at_first_failure() {
        let dir = scripts_dir(&["a.boink", "b.boink", "c.boink"]);
        let parser = RecordingParser {
            failing: vec!["b.boink"],
            ..Default::default()
        };
        let config = GeneratorConfig {
            on_failure: FailurePolicy::Abort,
            ..config_for(dir.path())
        };

        let err = batch::run(&config, &parser, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, GenError::CommandFailed { .. }));
        assert_eq!(parser.calls.borrow().len(), 2);
    }

    #[test]
    fn test_warn_continues_and_records_failures() {
        let dir = scripts_dir(&["a.boink", "b.boink", "c.boink"]);
        let parser = RecordingParser {
            failing: vec!["b.boink"],
            ..Default::default()
        };

        let result = batch::run(&config_for(dir.path()), &parser, &mut Vec::new()).unwrap();
        assert_eq!(parser.calls.borrow().len(), 3);
        assert_eq!(result.success, 2);
        assert_eq!(result.failed, 1);
        assert!(result.has_failures());
        assert!(result.failures[0].0.ends_with("b.boink"));
        assert!(result.failures[0].1.contains("Unexpected token"));
        assert_eq!(result.results[1].exit_code, Some(1));
    }

    #[test]
    fn test_missing_executable_under_ignore() {
        let dir = scripts_dir(&["a.boink", "b.boink"]);
        let parser = RecordingParser {
            missing: true,
            ..Default::default()
        };
        let config = GeneratorConfig {
            on_failure: FailurePolicy::Ignore,
            ..config_for(dir.path())
        };

        let result = batch::run(&config, &parser, &mut Vec::new()).unwrap();
        assert_eq!(result.failed, 2);
        assert_eq!(result.results[0].exit_code, None);
    }

    #[test]
    fn test_skip_up_to_date() {
        let dir = scripts_dir(&["a.boink", "b.boink"]);
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        let parser = RecordingParser::default();
        let config = GeneratorConfig {
            skip_up_to_date: true,
            ..config_for(dir.path())
        };

        let result = batch::run(&config, &parser, &mut Vec::new()).unwrap();
        assert_eq!(result.skipped, 1);
        assert_eq!(result.success, 1);
        assert_eq!(
            *parser.calls.borrow(),
            vec![(dir.path().join("b.boink"), dir.path().to_path_buf())]
        );
    }
}

//! # generate 命令实现
//!
//! 为测试脚本目录中的每个脚本生成解析树。
//!
//! ## 功能
//! - 组装配置并校验
//! - dry-run 时只列出计划执行的命令
//! - 顺序调用外部解析器，可选回显输出
//! - 输出汇总、失败表格与 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `batch/`, `invoke/`, `utils/output.rs`

use crate::batch::{self, report, BatchResult, GeneratorConfig, ScriptCollector};
use crate::cli::generate::{FailurePolicy, GenerateArgs};
use crate::error::{GenError, Result};
use crate::invoke::{artifact_path, ParserExecutable};
use crate::utils::output;

use std::io;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// dry-run 计划行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "Script")]
    script: String,
    #[tabled(rename = "Parse tree")]
    artifact: String,
    #[tabled(rename = "Command")]
    command: String,
}

/// 失败详情行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "Script")]
    script: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = GeneratorConfig::from(&args);
    config.validate()?;

    let parser = ParserExecutable::new(&config.executable).with_launcher(config.launcher.as_deref());

    output::print_header("Generating Boink Parse Trees");
    output::print_info(&format!(
        "Scripts: '{}'  ->  parse trees: '{}'",
        config.scripts_dir.display(),
        config.out_dir().display()
    ));
    output::print_info(&format!(
        "Parser: {}  (on failure: {})",
        parser.command_line(Path::new("<script>"), config.out_dir()),
        config.on_failure
    ));

    if config.dry_run {
        return print_plan(&config, &parser);
    }

    let stdout = io::stdout();
    let mut echo = stdout.lock();
    let result = batch::run(&config, &parser, &mut echo)?;
    drop(echo);

    if result.total() == 0 {
        output::print_warning(&format!(
            "No '*{}' scripts found in '{}'",
            config.suffix(),
            config.scripts_dir.display()
        ));
    } else {
        print_summary(&result);
    }

    if let Some(ref report_path) = args.report {
        report::to_csv(&result, report_path)?;
        output::print_success(&format!("Report saved to '{}'", report_path.display()));
    }

    if result.has_failures() && config.on_failure == FailurePolicy::Warn {
        return Err(GenError::BatchFailed {
            failed: result.failed,
            total: result.total(),
        });
    }

    Ok(())
}

/// 列出计划执行的调用，不启动任何进程
fn print_plan(config: &GeneratorConfig, parser: &ParserExecutable) -> Result<()> {
    let scripts: Vec<PathBuf> = ScriptCollector::new(&config.scripts_dir)
        .with_extension(&config.extension)
        .collect()?;

    if scripts.is_empty() {
        output::print_warning(&format!(
            "No '*{}' scripts found in '{}'",
            config.suffix(),
            config.scripts_dir.display()
        ));
        return Ok(());
    }

    let out_dir = config.out_dir();
    let rows: Vec<PlanRow> = scripts
        .iter()
        .map(|script| PlanRow {
            script: script.display().to_string(),
            artifact: artifact_path(script, out_dir).display().to_string(),
            command: parser.command_line(script, out_dir),
        })
        .collect();

    eprintln!("{}", Table::new(rows));
    output::print_done(&format!("[DRY] {} invocations planned", scripts.len()));

    Ok(())
}

/// 打印汇总
fn print_summary(result: &BatchResult) {
    for r in &result.results {
        match r.outcome {
            batch::Outcome::Success => output::print_generated(
                &r.script.display().to_string(),
                &r.artifact.display().to_string(),
            ),
            batch::Outcome::Skipped => {
                output::print_skip(&format!("{} (up to date)", r.script.display()))
            }
            batch::Outcome::Failed(_) => {}
        }
    }

    output::print_separator();

    if result.has_failures() {
        let rows: Vec<FailureRow> = result
            .failures
            .iter()
            .map(|(script, reason)| FailureRow {
                script: script.clone(),
                reason: reason.clone(),
            })
            .collect();
        eprintln!("{}", Table::new(rows));
    }

    output::print_done(&format!(
        "Processed {} scripts: {} parsed, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));
}

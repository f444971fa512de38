//! # 运行报告导出
//!
//! 把每个脚本的处理结果写成 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 调用
//! - 使用 `batch/runner.rs` 的 BatchResult
//! - 使用 `csv` 与 `serde` 写入 CSV 文件

use super::runner::{BatchResult, Outcome, ProcessResult};
use crate::error::{GenError, Result};

use serde::Serialize;
use std::path::Path;

/// CSV 报告的一行
#[derive(Debug, Serialize)]
struct ReportRow {
    script: String,
    status: &'static str,
    exit_code: Option<i32>,
    artifact: String,
    message: String,
}

impl From<&ProcessResult> for ReportRow {
    fn from(r: &ProcessResult) -> Self {
        let (status, message) = match &r.outcome {
            Outcome::Success => ("success", String::new()),
            Outcome::Skipped => ("skipped", "parse tree up to date".to_string()),
            Outcome::Failed(err) => ("failed", err.clone()),
        };
        ReportRow {
            script: r.script.display().to_string(),
            status,
            exit_code: r.exit_code,
            artifact: r.artifact.display().to_string(),
            message,
        }
    }
}

/// 导出运行报告为 CSV
pub fn to_csv(result: &BatchResult, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for r in &result.results {
        wtr.serialize(ReportRow::from(r))?;
    }

    wtr.flush().map_err(|e| GenError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

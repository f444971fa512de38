//! # 解析树文件路径
//!
//! Boink 的 `parse` 命令把 `<name>.boink` 的解析树写入
//! `<out_dir>/<name>.json`；`<name>` 已以 `.json` 结尾时不再追加扩展名。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 与 `commands/generate.rs` 使用

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// 解析树文件扩展名
pub const ARTIFACT_EXTENSION: &str = "json";

/// 计算脚本对应的解析树路径
pub fn artifact_path(script: &Path, out_dir: &Path) -> PathBuf {
    let suffix = format!(".{}", ARTIFACT_EXTENSION);
    let mut name = script.file_stem().map(OsString::from).unwrap_or_default();

    if !name.as_encoded_bytes().ends_with(suffix.as_bytes()) {
        name.push(&suffix);
    }
    out_dir.join(name)
}

/// 解析树存在且不早于脚本时视为最新
pub fn is_up_to_date(script: &Path, artifact: &Path) -> bool {
    let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified()).ok();

    match (modified(script), modified(artifact)) {
        (Some(script_time), Some(artifact_time)) => artifact_time >= script_time,
        _ => false,
    }
}

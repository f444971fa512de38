//! # 脚本收集器
//!
//! 列出测试脚本目录中扩展名匹配的脚本文件。
//!
//! ## 功能
//! - 只遍历目录第一层
//! - 后缀精确匹配（区分大小写）
//! - 按文件名排序，保证多次运行顺序一致
//!
//! ## 依赖关系
//! - 被 `batch::run` 与 `commands/generate.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{GenError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 脚本收集器
pub struct ScriptCollector {
    /// 脚本目录
    dir: PathBuf,
    /// 文件名后缀（含点）
    suffix: String,
}

impl ScriptCollector {
    /// 创建新的收集器，默认收集 `.boink` 文件
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            suffix: ".boink".to_string(),
        }
    }

    /// 设置扩展名（可带或不带前导点）
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.suffix = format!(".{}", extension.trim_start_matches('.'));
        self
    }

    /// 收集所有匹配的脚本
    ///
    /// 目录不存在时返回 `DirectoryNotFound`。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(GenError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut scripts = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| GenError::DirectoryReadError {
                path: self.dir.display().to_string(),
                source: e,
            })?;

            // 符号链接按目标判断；悬空链接视为非文件
            if self.matches(entry.path()) && entry.path().is_file() {
                scripts.push(entry.path().to_path_buf());
            }
        }

        tracing::debug!(
            dir = %self.dir.display(),
            count = scripts.len(),
            "collected scripts"
        );

        Ok(scripts)
    }

    /// 检查文件名是否以后缀结尾（按字节比较，非 UTF-8 文件名同样适用）
    fn matches(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => name.as_encoded_bytes().ends_with(self.suffix.as_bytes()),
            None => false,
        }
    }
}

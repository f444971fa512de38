//! # 批量处理模块
//!
//! 对测试脚本目录执行一次完整的解析树生成。
//!
//! ## 功能
//! - 收集匹配的脚本文件
//! - 顺序调用外部解析器
//! - 结果统计与 CSV 报告
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `walkdir` 收集文件
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod config;
pub mod report;
pub mod runner;

pub use collector::ScriptCollector;
pub use config::GeneratorConfig;
pub use runner::{BatchResult, BatchRunner, Outcome};

use crate::error::Result;
use crate::invoke::ScriptParser;

use std::io::Write;

/// 按配置收集脚本并逐个调用解析器
///
/// 目录缺失时在任何调用之前返回错误。
pub fn run<P, W>(config: &GeneratorConfig, parser: &P, echo: &mut W) -> Result<BatchResult>
where
    P: ScriptParser,
    W: Write,
{
    let scripts = ScriptCollector::new(&config.scripts_dir)
        .with_extension(&config.extension)
        .collect()?;

    BatchRunner::new(config, parser).run(scripts, echo)
}

//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! - 无子命令，全部参数见 `generate::GenerateArgs`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate

pub mod generate;

use clap::Parser;

/// boinkgen - Boink 解析树测试数据生成器
#[derive(Parser)]
#[command(name = "boinkgen")]
#[command(version)]
#[command(
    about = "Generate parse-tree fixtures for every Boink test script",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub generate: generate::GenerateArgs,
}

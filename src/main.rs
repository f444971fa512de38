//! # boinkgen - Boink 解析树测试数据生成器
//!
//! 遍历 test-scripts 目录，为每个 `.boink` 脚本调用 Boink 可执行文件的
//! `parse` 命令，生成解析器单元测试所需的 `.json` 解析树。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (脚本收集与顺序执行)
//!   │     ├── invoke/  (外部解析器调用)
//!   │     └── models/  (数据模型)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod invoke;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    utils::logging::init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

//! # 数据模型模块
//!
//! 定义外部命令调用结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `invoke/` 和 `batch/` 使用
//! - 子模块: invocation

pub mod invocation;

pub use invocation::Invocation;

//! 应用层 - 命令
//!
//! 分章用例的命令定义及处理器

mod chapter_commands;

pub mod handlers;

pub use chapter_commands::*;

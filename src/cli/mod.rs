//! CLI 模块
//!
//! 提供命令行工具的结果输出

mod printer;

pub use printer::{PathRow, PrintMode, Printer};

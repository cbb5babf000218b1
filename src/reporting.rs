//! # Reporting Module / 报告模块
//!
//! This module prints colorful, localized summaries of an export run to the console.
//!
//! 此模块在控制台打印导出运行的彩色本地化摘要。

pub mod console;

// Re-export common reporting functions
pub use console::{print_filter_report, print_summary};

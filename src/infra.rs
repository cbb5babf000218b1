//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the I/O around the translation table builder:
//! fetching the export, decoding TSV, and file system operations.
//!
//! 此模块为翻译表构建器提供外围 I/O：获取导出、解码 TSV 以及文件系统操作。

pub mod fetch;
pub mod fs;
pub mod tsv;

// Re-export i18n functions for easier access
pub use rust_i18n::t;

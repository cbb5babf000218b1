//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the exporter: configuration,
//! the locale column layout, the error taxonomy and the translation table builder.
//!
//! 此模块包含导出器的核心功能：配置、语言列布局、错误类型以及翻译表构建器。

pub mod config;
pub mod error;
pub mod locale;
pub mod table;

// Re-exports
pub use config::ExportConfig;
pub use error::ExportError;
pub use locale::{LocaleOrder, LocaleSlot};
pub use table::{build_from_rows, filter_rows, TranslationTable};

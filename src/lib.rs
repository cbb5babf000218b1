//! # Sheet Translations Library / Sheet Translations 库
//!
//! This library provides the core functionality for the `sheet-translations` tool,
//! which downloads a tab-separated translation spreadsheet export and writes a JSON
//! document mapping every locale to its translated strings.
//!
//! 此库为 `sheet-translations` 工具提供核心功能，
//! 该工具下载制表符分隔的翻译表格导出，并写出将每种语言映射到其翻译文本的 JSON 文档。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, locale layout, errors and the translation table builder
//! - `infra` - Fetching, TSV decoding and file system operations
//! - `reporting` - Console summaries
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 配置、语言布局、错误以及翻译表构建器
//! - `infra` - 网络获取、TSV 解码和文件系统操作
//! - `reporting` - 控制台摘要
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::table;

/// Picks the UI language for a requested locale tag.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the language
/// code (e.g., "en"), and finally falls back to the default language ("en").
/// With no request, the system locale is used.
pub fn select_language(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string())
        .replace('_', "-");
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        return locale;
    }
    locale
        .split('-')
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

/// Sets the UI language and returns the one chosen.
pub fn init(requested: Option<&str>) -> String {
    let lang = select_language(requested);
    rust_i18n::set_locale(&lang);
    lang
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");

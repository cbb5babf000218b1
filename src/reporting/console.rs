//! # Console Reporting Module / 控制台报告模块
//!
//! Prints what an export run did: how many rows matched, which keys were
//! duplicated, and a per-locale table of emitted keys.
//!
//! 打印导出运行的结果：匹配了多少行、哪些键重复，以及每种语言输出键数的表格。

use colored::*;

use crate::core::table::{BuildReport, TranslationTable};
use crate::infra::t;

/// Prints the filtering results, warning about every duplicated key.
///
/// 打印过滤结果，并对每个重复的键给出警告。
pub fn print_filter_report(
    report: &BuildReport,
    header_rows: usize,
    key_prefix: &str,
    locale: &str,
) {
    println!(
        "{}",
        t!(
            "rows_parsed",
            locale = locale,
            rows = report.data_rows + header_rows,
            header = header_rows
        )
    );
    println!(
        "{}",
        t!(
            "entries_matched",
            locale = locale,
            matched = report.matched,
            total = report.data_rows,
            prefix = key_prefix
        )
        .cyan()
    );

    for key in &report.duplicates {
        println!(
            "{}",
            t!("duplicate_key_warning", locale = locale, key = key).yellow()
        );
    }

    if report.matched == 0 {
        println!("{}", t!("no_entries_matched", locale = locale).yellow());
    }
}

/// Prints a formatted summary of the emitted table.
///
/// 在控制台打印输出翻译表的格式化摘要。
///
/// # Output Format / 输出格式
/// ```text
/// --- Export Summary ---
///   - Locale           | Keys
///   - en_US            |   412
///   - fr_FR            |   412
/// 2 locales, 412 keys, 1 skipped columns
/// ```
pub fn print_summary(table: &TranslationTable, report: &BuildReport, locale: &str) {
    println!("\n{}", t!("summary_banner", locale = locale).bold());
    println!(
        "  - {:<16} | {:>6}",
        t!("summary_header_locale", locale = locale).dimmed(),
        t!("summary_header_keys", locale = locale).dimmed()
    );

    for locale_table in table.locales() {
        println!(
            "  - {:<16} | {:>6}",
            locale_table.locale().green(),
            locale_table.len()
        );
    }

    println!(
        "{}",
        t!(
            "summary_totals",
            locale = locale,
            locales = table.locale_count(),
            keys = report.matched,
            skipped = report.skipped_slots
        )
        .bold()
    );
}

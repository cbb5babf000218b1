//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command: load the configuration, obtain the
//! TSV export (fetched, or read from `--input`), build the translation table and
//! write the JSON document.
//!
//! 此模块实现了 `run` 命令：加载配置，获取 TSV 导出（网络获取或从 `--input` 读取），
//! 构建翻译表并写出 JSON 文档。

use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::ExportConfig,
        error::ExportError,
        table::{build_from_rows, BuildReport, TranslationTable},
    },
    infra::{fetch::fetch_text, fs, t, tsv},
    reporting::console::{print_filter_report, print_summary},
};

/// Arguments of the `run` command.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: PathBuf,
    /// Whether `--config` was given; a missing explicit file is an error, a missing
    /// default file means built-in defaults.
    pub config_explicit: bool,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pretty: bool,
    pub dry_run: bool,
    pub language: String,
    /// Whether `--lang` was given; it then wins over the config's `language`.
    pub language_forced: bool,
}

/// The serialized document together with the table and counts it came from.
#[derive(Debug, Clone)]
pub struct RenderedExport {
    pub json: String,
    pub table: TranslationTable,
    pub report: BuildReport,
}

/// Decodes `text` as TSV and turns it into the JSON document described by `config`.
///
/// 将 `text` 解码为 TSV，并按 `config` 将其转换为 JSON 文档。
pub fn render(
    text: &str,
    config: &ExportConfig,
    pretty: bool,
) -> Result<RenderedExport, ExportError> {
    let rows = tsv::parse_rows(text)?;
    let (table, report) = build_from_rows(
        rows,
        &config.locale_order,
        config.header_rows,
        &config.key_prefix,
    )?;
    let json = if pretty {
        table.to_json_pretty()?
    } else {
        table.to_json()?
    };
    Ok(RenderedExport { json, table, report })
}

/// Executes the run command with the provided arguments.
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub async fn execute(options: RunOptions) -> Result<()> {
    let mut locale = options.language.clone();
    let config = load_config(&options.config, options.config_explicit, &locale)?;

    if !options.language_forced {
        if let Some(language) = config.language.as_deref() {
            locale = crate::init(Some(language));
        }
    }

    if options.config.exists() {
        println!(
            "{}",
            t!("config_loading", locale = &locale, path = options.config.display())
        );
    } else {
        println!(
            "{}",
            t!(
                "config_missing_using_defaults",
                locale = &locale,
                path = options.config.display()
            )
            .yellow()
        );
    }

    let stop_token = setup_signal_handler(&locale);

    let text = tokio::select! {
        biased;
        _ = stop_token.cancelled() => {
            anyhow::bail!(t!("run_cancelled", locale = &locale).to_string());
        }
        text = load_source(&config, options.input.as_deref(), &locale) => text?,
    };

    let rendered = render(&text, &config, options.pretty || config.pretty)
        .with_context(|| t!("build_failed", locale = &locale).to_string())?;

    print_filter_report(
        &rendered.report,
        config.header_rows,
        &config.key_prefix,
        &locale,
    );
    print_summary(&rendered.table, &rendered.report, &locale);

    if options.dry_run {
        println!("\n{}", t!("dry_run_notice", locale = &locale).yellow());
        return Ok(());
    }

    ensure_not_cancelled(&stop_token, &locale)?;
    let destination = options
        .output
        .clone()
        .unwrap_or_else(|| config.expanded_destination());
    fs::write_atomic(&destination, &rendered.json).with_context(|| {
        t!("write_failed", locale = &locale, path = destination.display()).to_string()
    })?;

    println!(
        "\n{}",
        t!(
            "write_success",
            locale = &locale,
            bytes = rendered.json.len(),
            path = destination.display()
        )
        .green()
        .bold()
    );
    Ok(())
}

fn load_config(path: &Path, explicit: bool, locale: &str) -> Result<ExportConfig> {
    if !path.exists() && !explicit {
        return Ok(ExportConfig::default());
    }

    let config = ExportConfig::load(path).with_context(|| {
        t!("config_parse_failed", locale = locale, path = path.display()).to_string()
    })?;
    Ok(config)
}

async fn load_source(config: &ExportConfig, input: Option<&Path>, locale: &str) -> Result<String> {
    match input {
        Some(path) => {
            println!("{}", t!("reading_input", locale = locale, path = path.display()));
            fs::read_input(path)
                .with_context(|| t!("input_read_failed", locale = locale).to_string())
        }
        None => {
            println!(
                "{}",
                t!("fetching_source", locale = locale, url = &config.source_url)
            );
            fetch_text(&config.source_url, config.timeout())
                .await
                .with_context(|| t!("fetch_failed", locale = locale).to_string())
        }
    }
}

/// Fails with the cancellation message once the token has been cancelled.
/// Checked right before the destination is replaced, so a Ctrl-C received while
/// rendering still prevents the write.
///
/// 令牌被取消后返回取消错误。在替换目标文件前检查，渲染期间收到的 Ctrl-C 同样会阻止写入。
pub fn ensure_not_cancelled(token: &CancellationToken, locale: &str) -> Result<()> {
    if token.is_cancelled() {
        anyhow::bail!(t!("run_cancelled", locale = locale).to_string());
    }
    Ok(())
}

/// Cancels the returned token on Ctrl-C so the run stops before writing.
fn setup_signal_handler(locale: &str) -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();
    let locale = locale.to_string();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            println!("\n{}", t!("shutdown_signal", locale = &locale).yellow());
            token_clone.cancel();
        }
    });

    token
}

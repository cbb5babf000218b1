//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which creates a new export
//! configuration file, either directly from the built-in defaults or through an
//! interactive wizard.
//!
//! 此模块实现了 `init` 命令，用于创建新的导出配置文件，
//! 可以直接使用内置默认值，也可以通过交互式向导创建。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::{fs, path::Path, path::PathBuf};

use crate::core::config::ExportConfig;
use crate::infra::t;

const CONFIG_HEADER: &str = "# sheet-translations export configuration / 导出配置
#
# locale_order lists one entry per spreadsheet column after the key column.
# \"SKIP\" keeps a column's position without emitting it.
# locale_order 中每一项对应键列之后的一列；\"SKIP\" 占位但不输出。

";

/// Renders `config` as a commented TOML document.
pub fn render_config(config: &ExportConfig) -> Result<String> {
    let body = config.to_toml()?;
    Ok(format!("{CONFIG_HEADER}{body}"))
}

/// Executes the init command with the provided arguments.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `language` - Language for console messages
/// * `non_interactive` - Write the defaults without prompting
/// * `force` - Whether to overwrite an existing file without asking
pub fn execute(output: &Path, language: &str, non_interactive: bool, force: bool) -> Result<()> {
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!("\n{}", t!("init_wizard_welcome", locale = language).cyan().bold());
        println!("{}", t!("init_wizard_description", locale = language));
    }

    if output.exists() && !force {
        if non_interactive {
            println!(
                "{}",
                t!("init_file_exists", locale = language, path = output.display()).red()
            );
            println!("{}", t!("init_use_force", locale = language).yellow());
            return Ok(());
        }

        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init_overwrite_prompt", locale = language, path = output.display()))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let config = if non_interactive {
        ExportConfig::default()
    } else {
        run_wizard(&theme, language)?
    };

    write_config(output, &config, language)
}

fn run_wizard(theme: &ColorfulTheme, language: &str) -> Result<ExportConfig> {
    let defaults = ExportConfig::default();

    let source_url: String = Input::with_theme(theme)
        .with_prompt(t!("init_source_url_prompt", locale = language))
        .default(defaults.source_url.clone())
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let destination: String = Input::with_theme(theme)
        .with_prompt(t!("init_destination_prompt", locale = language))
        .default(defaults.destination.display().to_string())
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let key_prefix: String = Input::with_theme(theme)
        .with_prompt(t!("init_key_prefix_prompt", locale = language))
        .default(defaults.key_prefix.clone())
        .allow_empty(true)
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let config = ExportConfig {
        language: Some(language.to_string()),
        source_url,
        destination: PathBuf::from(destination),
        key_prefix,
        ..defaults
    };
    config.validate()?;
    Ok(config)
}

fn write_config(path: &Path, config: &ExportConfig, language: &str) -> Result<()> {
    let contents = render_config(config)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init_create_parent_dir_failed", locale = language, path = parent.display())
                    .to_string()
            })?;
        }
    }

    fs::write(path, contents).with_context(|| {
        t!("init_write_failed", locale = language, path = path.display()).to_string()
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init_next_steps", locale = language));

    Ok(())
}

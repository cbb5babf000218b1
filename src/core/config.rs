//! # Configuration Module / 配置模块
//!
//! The export configuration, loaded from a TOML file (`Translations.toml` by default).
//! Every field has a default reproducing the stock spreadsheet export, so an empty
//! file is a valid configuration.
//!
//! 导出配置，从 TOML 文件（默认为 `Translations.toml`）加载。
//! 每个字段都有默认值，因此空文件也是有效配置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::{ExportError, Result};
use crate::core::locale::LocaleOrder;

pub const DEFAULT_CONFIG_FILE: &str = "Translations.toml";

pub const DEFAULT_SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/10HKSFmxGVEIO92loVQetVmjXT0qpf3EA2jxuQSSYTdU/export?format=tsv&id=10HKSFmxGVEIO92loVQetVmjXT0qpf3EA2jxuQSSYTdU&gid=0";

pub const DEFAULT_DESTINATION: &str = "./src/translation/tr.json";

pub const DEFAULT_KEY_PREFIX: &str = "web.";

pub const DEFAULT_HEADER_ROWS: usize = 4;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Column layout of the stock export. The two `SKIP` slots are the comment and
/// context columns that sit between the English text and the first translation.
pub const DEFAULT_LOCALE_ORDER: &str = "en_US SKIP SKIP ar ast az bg bn_BN ca cs_CZ da_DK de_DE el eo es fa fil fi fr_FR fr_CH gl he hr_HR hsb hu_HU in_ID it ja ko kz lt_LT nb_NO ne nl pl_PL pt_BR pt_PT ro ru sk sl_SI sr_RS sv_SE tr uk vi_VN zh_CN zh_HK zh_TW";

/// Everything an export run needs.
/// 导出运行所需的全部配置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// The language for console messages (e.g., "en", "zh-CN"). When unset, the
    /// system locale decides.
    /// 控制台消息的语言（例如 "en", "zh-CN"）。未设置时由系统语言决定。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// The TSV export URL.
    /// TSV 导出地址。
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Where the JSON document is written. `~` and `$VARS` are expanded.
    /// JSON 文档的写入路径，支持 `~` 与 `$VARS` 展开。
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Rows whose key starts with this prefix are exported, prefix removed.
    /// 键以此前缀开头的行会被导出（去除前缀）。
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Leading header rows to discard.
    /// 需要丢弃的表头行数。
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,

    /// Request timeout for the fetch, in seconds.
    /// 获取请求的超时时间（秒）。
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Write indented JSON instead of compact JSON.
    /// 输出缩进格式的 JSON 而非紧凑格式。
    #[serde(default)]
    pub pretty: bool,

    /// Column-aligned locale identifiers; `SKIP` marks an ignored column.
    /// 与列对齐的语言标识符；`SKIP` 表示忽略的列。
    #[serde(default = "default_locale_order")]
    pub locale_order: LocaleOrder,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            language: None,
            source_url: default_source_url(),
            destination: default_destination(),
            key_prefix: default_key_prefix(),
            header_rows: default_header_rows(),
            timeout_secs: default_timeout_secs(),
            pretty: false,
            locale_order: default_locale_order(),
        }
    }
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_destination() -> PathBuf {
    PathBuf::from(DEFAULT_DESTINATION)
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_header_rows() -> usize {
    DEFAULT_HEADER_ROWS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_locale_order() -> LocaleOrder {
    LocaleOrder::parse(DEFAULT_LOCALE_ORDER)
}

impl ExportConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ExportConfig =
            toml::from_str(content).map_err(|e| ExportError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ExportError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.source_url.trim().is_empty() {
            return Err(ExportError::InvalidConfig("source_url must not be empty".into()));
        }
        if self.destination.as_os_str().is_empty() {
            return Err(ExportError::InvalidConfig("destination must not be empty".into()));
        }
        if self
            .locale_order
            .slots()
            .iter()
            .any(|slot| slot.locale().is_some_and(|id| id.trim().is_empty()))
        {
            return Err(ExportError::InvalidConfig(
                "locale_order contains an empty locale identifier".into(),
            ));
        }
        if let Some(locale) = self.locale_order.first_duplicate() {
            return Err(ExportError::InvalidConfig(format!(
                "locale '{locale}' appears more than once in locale_order"
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The destination with `~` and environment variables expanded.
    /// Falls back to the literal path when expansion fails.
    pub fn expanded_destination(&self) -> PathBuf {
        let raw = self.destination.to_string_lossy();
        match shellexpand::full(&raw) {
            Ok(expanded) => PathBuf::from(expanded.into_owned()),
            Err(_) => self.destination.clone(),
        }
    }

    /// Renders the configuration as TOML, used by `init`.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ExportError::InvalidConfig(e.to_string()))
    }
}

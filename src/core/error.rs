//! # Error Module / 错误模块
//!
//! Every failure of an export run. None of them are retried; each aborts the run
//! before the destination is touched, except `Write` itself.
//!
//! 导出运行的所有失败类型。均不重试；除 `Write` 外，任何错误都会在写入目标文件之前终止运行。

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to fetch '{url}'")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching '{url}' returned HTTP {status}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read input '{}'", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode TSV export")]
    Tsv(#[from] csv::Error),

    /// A matched row is too short for the column a locale resolves to.
    #[error(
        "row '{key}' has {width} cells but locale '{locale}' reads column {column}"
    )]
    DataShape {
        key: String,
        locale: String,
        column: usize,
        width: usize,
    },

    #[error("failed to read configuration '{}'", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to serialize translation table")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = ExportError> = std::result::Result<T, E>;

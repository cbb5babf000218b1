//! # Fetch Module / 获取模块
//!
//! Downloads the spreadsheet export. A single GET, no retries; any transport
//! failure or non-success status aborts the run.
//!
//! 下载表格导出。仅发送一次 GET 请求，不重试；任何传输失败或非成功状态都会终止运行。

use std::time::Duration;

use crate::core::error::{ExportError, Result};

/// Fetches `url` and returns its body decoded as UTF-8.
///
/// The body is always decoded as UTF-8 regardless of the advertised charset,
/// with invalid sequences replaced.
///
/// 获取 `url` 并返回按 UTF-8 解码的响应体。无论服务器声明何种字符集都按 UTF-8 解码，
/// 无效序列会被替换。
pub async fn fetch_text(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|source| ExportError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ExportError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExportError::FetchStatus {
            url: url.to_string(),
            status,
        });
    }

    let bytes = response.bytes().await.map_err(|source| ExportError::Fetch {
        url: url.to_string(),
        source,
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

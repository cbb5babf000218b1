//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations: reading a local
//! export in place of the fetch, and replacing the destination file atomically.
//!
//! 此模块提供文件系统操作的实用功能：读取本地导出文件以代替网络获取，
//! 以及原子地替换目标文件。

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::error::{ExportError, Result};

/// Reads a local TSV export, decoding it as UTF-8 the same way a fetched body is.
///
/// # Arguments
/// * `path` - Path to the exported file
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ExportError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes `contents` to `path`, replacing any existing file.
///
/// Parent directories are created as needed. The data goes to a temporary file in
/// the same directory first and is renamed over `path`, so a failed write never
/// leaves a truncated destination behind.
///
/// # Arguments
/// * `path` - Destination file
/// * `contents` - Full file contents
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut temp = tempfile::Builder::new()
        .prefix(".sheet-translations-")
        .tempfile_in(parent)
        .map_err(write_err)?;
    temp.write_all(contents.as_bytes()).map_err(write_err)?;
    temp.flush().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

//! # Commands Module / 命令模块
//!
//! - `run` - Fetch the export and write the translation table
//! - `init` - Create a configuration file
//!
//! - `run` - 获取导出并写出翻译表
//! - `init` - 创建配置文件

pub mod init;
pub mod run;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("终端 I/O 错误: {0}")]
    Io(#[from] io::Error),

    #[error("配置文件 {path} 解析失败: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;

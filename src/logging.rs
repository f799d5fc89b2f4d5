use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::data_dir;

/// 初始化日志，写入 ~/.local/share/todolist/todolist.log
///
/// `RUST_LOG` 优先于配置中的 `log_filter`。终端被 TUI 占用，
/// 打不开日志文件时宁可不记录也不写 stderr。
pub fn init(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    match open_log_file() {
        Ok((path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}

fn open_log_file() -> std::io::Result<(PathBuf, File)> {
    let path = data_dir()?.join("todolist.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::IconKind;

const APP_DIR: &str = "todolist";

/// 图标行显示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconRow {
    #[default]
    Always,
    WhenTyping, // 输入框非空时才显示
}

/// 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub icon_row: IconRow,
    pub default_icon: IconKind,
    pub sample_items: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_row: IconRow::Always,
            default_icon: IconKind::Default,
            sample_items: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// 配置文件路径 (~/.config/todolist/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// 从TOML文件加载配置，文件不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_default_location() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

/// 获取数据目录路径 (~/.local/share/todolist/)
pub fn data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join(APP_DIR);

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

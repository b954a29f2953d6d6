//! 设置持久化：`ReviewConfig` <-> TOML 文件。
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use cjk_review_core::config::ReviewConfig;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("找不到用户配置目录，请用 --config 指定设置文件")]
    NoConfigDir,
    #[error("无法写入 {}：{source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("设置序列化失败：{0}")]
    Serialize(#[from] toml::ser::Error),
}

/// `<config_dir>/cjk-review/config.toml`
pub fn default_path() -> Result<PathBuf, SettingsError> {
    dirs::config_dir()
        .map(|dir| dir.join("cjk-review").join("config.toml"))
        .ok_or(SettingsError::NoConfigDir)
}

/// 读取设置；文件不存在或内容无效时回到默认值。
pub fn load(path: &Path) -> ReviewConfig {
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("没有设置文件 {}，使用默认设置", path.display());
            return ReviewConfig::default();
        }
        Err(e) => {
            warn!("读取 {} 失败，使用默认设置：{e}", path.display());
            return ReviewConfig::default();
        }
    };
    match toml::from_str(&s) {
        Ok(config) => {
            info!("已加载设置 {}", path.display());
            config
        }
        Err(e) => {
            warn!("设置文件 {} 无法解析，使用默认设置：{e}", path.display());
            ReviewConfig::default()
        }
    }
}

pub fn save(path: &Path, config: &ReviewConfig) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_owned(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let s = toml::to_string_pretty(config)?;
    fs::write(path, s).map_err(io_err)
}

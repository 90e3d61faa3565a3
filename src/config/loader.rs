use crate::config::types::HoppmanConfig;
use crate::{HoppmanError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    pub const CONFIG_FILE: &'static str = "hoppman.toml";

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<HoppmanConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HoppmanError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            HoppmanError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// 查找并加载配置文件
    /// 查找顺序：
    /// 1. 当前目录及父目录
    /// 2. 用户配置目录 ~/.config/hoppman/
    pub fn find_and_load() -> Option<HoppmanConfig> {
        let path = Self::find_config_path()?;
        match Self::load_from_path(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    /// 加载配置：显式路径优先，否则自动查找，都没有时使用默认值
    pub fn load(explicit: Option<&Path>) -> Result<HoppmanConfig> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::find_and_load().unwrap_or_default()),
        }
    }

    /// 定位配置文件
    pub fn find_config_path() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_upwards(&current).or_else(Self::user_config_path)
    }

    /// 从指定目录开始向上查找
    pub fn find_upwards(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            // 尝试父目录
            if !current.pop() {
                break;
            }
        }

        None
    }

    /// 用户配置目录中的配置文件
    fn user_config_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let config_path = home
            .join(".config")
            .join("hoppman")
            .join(Self::CONFIG_FILE);

        config_path.exists().then_some(config_path)
    }
}

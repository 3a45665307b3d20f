//! # Config 模块
//!
//! 运行时配置管理。
//!
//! ## 配置优先级
//!
//! 1. 配置文件 (config.json)
//! 2. 默认值
//!
//! 配置文件缺失或格式错误不是致命问题：记录日志后退回默认值。
//! （与资源缺失不同，后者是致命错误。）

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 默认配置文件路径（相对于工作目录）
pub const CONFIG_PATH: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 资源根目录
    #[serde(default = "default_assets_root")]
    pub assets_root: PathBuf,

    /// 窗口配置
    #[serde(default)]
    pub window: WindowConfig,

    /// 音频配置
    #[serde(default)]
    pub audio: AudioConfig,
}

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// 窗口宽度
    #[serde(default = "default_window_width")]
    pub width: u32,

    /// 窗口高度
    #[serde(default = "default_window_height")]
    pub height: u32,

    /// 窗口标题
    #[serde(default = "default_window_title")]
    pub title: String,
}

/// 音频配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// 菜单音乐音量 (0.0 - 1.0)
    #[serde(default = "default_music_volume")]
    pub music_volume: f32,

    /// 音效音量 (0.0 - 1.0)
    #[serde(default = "default_sfx_volume")]
    pub sfx_volume: f32,
}

fn default_assets_root() -> PathBuf {
    PathBuf::from("assets")
}

fn default_window_width() -> u32 {
    800
}

fn default_window_height() -> u32 {
    600
}

fn default_window_title() -> String {
    "Trivia Game!".to_string()
}

fn default_music_volume() -> f32 {
    0.7
}

fn default_sfx_volume() -> f32 {
    1.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_root: default_assets_root(),
            window: WindowConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_window_title(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_volume: default_music_volume(),
            sfx_volume: default_sfx_volume(),
        }
    }
}

impl AppConfig {
    /// 从文件加载配置；失败时退回默认值
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("配置文件 {} 格式错误，使用默认配置: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                debug!("未找到配置文件 {}，使用默认配置", path.display());
                Self::default()
            }
        }
    }
}

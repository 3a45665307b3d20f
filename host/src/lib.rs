//! # Host 层
//!
//! 问答游戏的宿主层实现，使用 macroquad 作为渲染和 IO 引擎。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 窗口与渲染
//! - 资源加载
//! - 音频播放
//! - 输入采集
//! - 将 Core 的 Command 转换为实际效果
//!
//! Host 层不包含游戏规则，只负责驱动 trivia-core 的会话状态机。
//! 所有状态由顶层的 [`AppState`] 拥有，逐级传入各界面，
//! 不存在跨界面的全局可变状态。

pub mod app;
pub mod audio;
pub mod config;
pub mod input;
pub mod resources;
pub mod screen;
pub mod screens;
pub mod ui;

pub use app::AppState;
pub use audio::{AudioManager, MusicLoop};
pub use config::{AppConfig, AudioConfig, CONFIG_PATH, WindowConfig};
pub use input::InputManager;
pub use resources::{Assets, ResourceError};
pub use screen::Screen;
pub use ui::{IconButton, Theme, UiContext};

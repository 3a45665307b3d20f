//! # App 模块
//!
//! 应用状态与主循环逻辑。
//!
//! [`AppState`] 是唯一的顶层状态容器：当前界面、资源、音频、
//! 输入与各界面的状态都由它拥有，并在 update/draw 中逐级传入。

mod draw;
mod update;

pub use draw::draw;
pub use update::update;

use tracing::warn;

use crate::audio::{AudioManager, MusicLoop};
use crate::config::AppConfig;
use crate::input::InputManager;
use crate::resources::Assets;
use crate::screen::Screen;
use crate::screens::{AboutScreen, GameScreen, MenuScreen};
use crate::ui::{Theme, UiContext};

/// 应用状态
pub struct AppState {
    /// 应用配置
    pub config: AppConfig,
    /// 当前界面
    pub screen: Screen,
    /// 全部游戏资源
    pub assets: Assets,
    /// 音频管理器；设备初始化失败时为 None（静音运行）
    pub audio: Option<AudioManager>,
    /// 菜单音乐循环计数器
    pub music: MusicLoop,
    /// UI 上下文
    pub ui_context: UiContext,
    /// 输入管理器
    pub input_manager: InputManager,
    /// 是否请求退出
    pub should_quit: bool,

    // ===== 各界面状态 =====
    /// 主菜单
    pub menu_screen: MenuScreen,
    /// 关于页面
    pub about_screen: AboutScreen,
    /// 游戏界面
    pub game_screen: GameScreen,
}

impl AppState {
    pub fn new(config: AppConfig, assets: Assets) -> Self {
        let audio = match AudioManager::new(config.audio.music_volume, config.audio.sfx_volume) {
            Ok(manager) => Some(manager),
            Err(e) => {
                warn!("音频不可用，以静音模式运行: {}", e);
                None
            }
        };

        let menu_screen = MenuScreen::new(&assets);
        let about_screen = AboutScreen::new(&assets);

        Self {
            config,
            screen: Screen::Menu,
            assets,
            audio,
            music: MusicLoop::new(),
            ui_context: UiContext::new(Theme::default()),
            input_manager: InputManager::new(),
            should_quit: false,
            menu_screen,
            about_screen,
            game_screen: GameScreen::new(),
        }
    }
}

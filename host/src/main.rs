//! # Trivia Game - Host
//!
//! 真假问答游戏的可执行入口：窗口、帧循环、致命错误处理。

use std::sync::OnceLock;

use macroquad::prelude::*;

use tracing::{error, info};

use host::app::{self, AppState};
use host::config::{AppConfig, CONFIG_PATH};
use host::resources::Assets;

/// 配置只解析一次，window_conf 与 main 共用
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::load_or_default(CONFIG_PATH))
}

/// 窗口配置（macroquad 在进入 main 前调用，且只调用一次）
fn window_conf() -> Conf {
    // 日志必须在首次读取配置之前初始化，否则配置告警会丢失
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = app_config();
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = app_config().clone();

    // 资源缺失是唯一的致命错误：进入主循环前退出
    let assets = match Assets::load(&config.assets_root) {
        Ok(assets) => assets,
        Err(e) => {
            error!("资源加载失败: {}", e);
            std::process::exit(1);
        }
    };

    let mut app_state = AppState::new(config, assets);
    info!("初始化完成");

    loop {
        app::update(&mut app_state);
        app::draw(&app_state);

        if app_state.should_quit {
            break;
        }
        next_frame().await;
    }
}

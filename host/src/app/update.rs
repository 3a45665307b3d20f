//! 更新逻辑
//!
//! 路由器：每帧根据当前界面分发更新，并执行 Core 发来的指令。

use macroquad::prelude::*;

use tracing::info;

use trivia_core::Command;

use crate::screen::Screen;
use crate::screens::{AboutAction, GameAction, GameScreen, MenuAction};

use super::AppState;

/// 更新逻辑
pub fn update(app_state: &mut AppState) {
    let dt = get_frame_time();

    // 更新 UI 上下文
    app_state.ui_context.update();

    // 根据当前界面处理更新
    match app_state.screen {
        Screen::Menu => update_menu(app_state),
        Screen::Playing => update_playing(app_state, dt),
        Screen::About => update_about(app_state),
    }

    // 菜单音乐只在 Menu/About 循环
    if app_state.screen.plays_music()
        && app_state.music.tick()
        && let Some(audio) = &mut app_state.audio
    {
        audio.play_music(&app_state.assets.menu_music);
    }
}

/// 更新主菜单
fn update_menu(app_state: &mut AppState) {
    match app_state.menu_screen.update(&app_state.ui_context) {
        MenuAction::Play => enter_playing(app_state),
        MenuAction::About => app_state.screen = Screen::About,
        MenuAction::Quit => {
            info!("玩家选择退出");
            app_state.should_quit = true;
        }
        MenuAction::None => {}
    }
}

/// 进入游戏：停止菜单音乐，重建游戏界面
fn enter_playing(app_state: &mut AppState) {
    if let Some(audio) = &mut app_state.audio {
        audio.stop_music();
    }
    app_state.music.reset();
    app_state.game_screen = GameScreen::new();
    app_state.screen = Screen::Playing;
    info!("开始新一局");
}

/// 更新游戏界面
fn update_playing(app_state: &mut AppState, dt: f32) {
    let events = app_state.input_manager.poll();
    let (action, commands) = app_state.game_screen.update(dt, &events);

    for command in commands {
        execute_command(app_state, command);
    }

    if action == GameAction::ReturnToMenu {
        app_state.screen = Screen::Menu;
        info!("返回主菜单");
    }
}

/// 更新关于页面
fn update_about(app_state: &mut AppState) {
    if app_state.about_screen.update(&app_state.ui_context) == AboutAction::Back {
        app_state.screen = Screen::Menu;
    }
}

/// 执行 Core 发来的指令
fn execute_command(app_state: &AppState, command: Command) {
    match command {
        Command::PlaySound(cue) => {
            if let Some(audio) = &app_state.audio {
                audio.play_sfx(app_state.assets.sound_for(cue));
            }
        }
        Command::Finished(summary) => {
            info!(score = %summary.score_fraction(), "会话结束");
        }
    }
}

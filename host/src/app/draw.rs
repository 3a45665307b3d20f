//! 渲染逻辑

use crate::screen::Screen;

use super::AppState;

/// 渲染函数
///
/// 只读绘制当前界面，不改变任何状态。
pub fn draw(app_state: &AppState) {
    match app_state.screen {
        Screen::Menu => app_state.menu_screen.draw(&app_state.ui_context),
        Screen::Playing => app_state
            .game_screen
            .draw(&app_state.ui_context, &app_state.assets),
        Screen::About => app_state.about_screen.draw(&app_state.ui_context),
    }
}

//! # 主菜单界面

use macroquad::prelude::*;

use crate::resources::Assets;
use crate::ui::{IconButton, UiContext};

/// 主菜单动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    /// 开始一局游戏
    Play,
    /// 打开关于页面
    About,
    /// 退出程序
    Quit,
}

/// 主菜单界面
///
/// 三个固定命中区：开始 (10, 330, 256×256)、
/// 退出 (650, 450, 128×128)、关于 (10, 10, 64×64)。
pub struct MenuScreen {
    /// 菜单背景
    header: Texture2D,
    /// 按钮列表
    buttons: Vec<(MenuAction, IconButton)>,
}

impl MenuScreen {
    pub fn new(assets: &Assets) -> Self {
        let buttons = vec![
            (
                MenuAction::Play,
                IconButton::new(assets.play_button.clone(), 10.0, 330.0, 256.0, 256.0),
            ),
            (
                MenuAction::Quit,
                IconButton::new(assets.quit_button.clone(), 650.0, 450.0, 128.0, 128.0),
            ),
            (
                MenuAction::About,
                IconButton::new(assets.about_button.clone(), 10.0, 10.0, 64.0, 64.0),
            ),
        ];
        Self {
            header: assets.header.clone(),
            buttons,
        }
    }

    /// 更新界面，返回用户动作
    pub fn update(&mut self, ctx: &UiContext) -> MenuAction {
        for (action, button) in &mut self.buttons {
            if button.update(ctx) {
                return *action;
            }
        }
        MenuAction::None
    }

    /// 绘制界面
    pub fn draw(&self, ctx: &UiContext) {
        draw_texture(&self.header, 0.0, 0.0, WHITE);
        for (_, button) in &self.buttons {
            button.draw(ctx);
        }
    }
}

//! # 关于页面
//!
//! 静态说明文本，左上角返回按钮回到主菜单。

use macroquad::prelude::*;

use crate::resources::Assets;
use crate::ui::{IconButton, UiContext, draw_text_top_left};

/// 关于页面的说明文本
const ABOUT_TEXT: &str = "Hello you all, and welcome to our Trivia Game!\n\
The game was firstly developed in 13.10.2022,\n\
that's when we first started working on the game.\n\
By we I mean Me and Bar Levi.\n\
Bar is a student who is now learning how to develop computer games.\n\
He also helps other younger students with their games and I am one of them.\n\
The game itself is a trivia show in which you need to place the fact into the\n\
correct answer.\n\
Hope you enjoy :D ";

/// 文本起始纵坐标
const TEXT_TOP: f32 = 100.0;
/// 相邻两行的纵向间距
const TEXT_LINE_ADVANCE: f32 = 40.0;

/// 关于页面动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutAction {
    None,
    /// 返回主菜单
    Back,
}

/// 关于页面
pub struct AboutScreen {
    /// 返回按钮
    back: IconButton,
}

impl AboutScreen {
    pub fn new(assets: &Assets) -> Self {
        Self {
            back: IconButton::new(assets.back_button.clone(), 10.0, 10.0, 64.0, 64.0),
        }
    }

    /// 更新界面，返回用户动作
    pub fn update(&mut self, ctx: &UiContext) -> AboutAction {
        if self.back.update(ctx) {
            AboutAction::Back
        } else {
            AboutAction::None
        }
    }

    /// 绘制界面
    pub fn draw(&self, ctx: &UiContext) {
        let theme = &ctx.theme;

        clear_background(theme.black);
        self.back.draw(ctx);

        draw_text_top_left("ABOUT", 300.0, 10.0, theme.font_size_title, theme.white);

        let mut y = TEXT_TOP;
        for line in ABOUT_TEXT.split('\n') {
            draw_text_top_left(line, 0.0, y, theme.font_size_text, theme.white);
            y += TEXT_LINE_ADVANCE;
        }
    }
}

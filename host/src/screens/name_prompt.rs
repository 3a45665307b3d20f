//! # 玩家名输入界面
//!
//! 进入一局游戏前的文本输入。
//!
//! ## 设计说明
//!
//! - 缓冲区编辑（`push_char` / `backspace` / `submit`）是纯逻辑，
//!   可以脱离窗口环境测试；macroquad 轮询只发生在 [`NamePrompt::update`]
//! - 提交校验失败时界面原地不动，不展示错误信息
//! - 窗口关闭由主循环统一处理，这里不做特殊分支

use macroquad::prelude::*;

use trivia_core::Username;

use crate::ui::{UiContext, draw_text_top_left};

/// 输入框宽度
pub const TEXTBOX_WIDTH: f32 = 300.0;
/// 输入框高度
pub const TEXTBOX_HEIGHT: f32 = 50.0;

/// 输入界面动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    None,
    /// 玩家名通过校验并提交
    Submitted(Username),
}

/// 玩家名输入界面
#[derive(Debug, Default)]
pub struct NamePrompt {
    /// 正在编辑的文本
    buffer: String,
}

impl NamePrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前缓冲区内容
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// 追加一个字符（控制字符忽略）
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.buffer.push(c);
        }
    }

    /// 删除最后一个字符
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// 尝试提交
    ///
    /// 校验失败返回 None，缓冲区保持不变。
    pub fn submit(&self) -> Option<Username> {
        Username::parse(&self.buffer).ok()
    }

    /// 轮询键盘输入，返回本帧动作
    pub fn update(&mut self) -> PromptAction {
        while let Some(c) = get_char_pressed() {
            self.push_char(c);
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }
        if is_key_pressed(KeyCode::Enter)
            && let Some(name) = self.submit()
        {
            return PromptAction::Submitted(name);
        }
        PromptAction::None
    }

    /// 绘制界面
    pub fn draw(&self, ctx: &UiContext) {
        let theme = &ctx.theme;

        clear_background(theme.black);

        let textbox = Rect::new(
            ctx.screen_width / 2.0 - TEXTBOX_WIDTH / 2.0,
            ctx.screen_height / 2.0 - TEXTBOX_HEIGHT / 2.0,
            TEXTBOX_WIDTH,
            TEXTBOX_HEIGHT,
        );
        draw_rectangle(textbox.x, textbox.y, textbox.w, textbox.h, theme.white);

        draw_text_top_left(
            "Please enter your name:",
            textbox.x - 42.0,
            textbox.y - 60.0,
            theme.font_size_large,
            theme.white,
        );
        draw_text_top_left(
            &self.buffer,
            textbox.x + 5.0,
            textbox.y + 10.0,
            theme.font_size_large,
            theme.black,
        );
        draw_text_top_left(
            "(Press 'Enter' to submit)",
            textbox.x + 55.0,
            textbox.y + 70.0,
            theme.font_size_small,
            theme.white,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_backspace() {
        let mut prompt = NamePrompt::new();
        prompt.push_char('B');
        prompt.push_char('a');
        prompt.push_char('r');
        assert_eq!(prompt.buffer(), "Bar");
        prompt.backspace();
        assert_eq!(prompt.buffer(), "Ba");
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut prompt = NamePrompt::new();
        prompt.push_char('\u{8}');
        prompt.push_char('\r');
        prompt.push_char('A');
        assert_eq!(prompt.buffer(), "A");
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let mut prompt = NamePrompt::new();
        prompt.backspace();
        assert_eq!(prompt.buffer(), "");
    }

    #[test]
    fn test_submit_rejects_blank_buffer() {
        let mut prompt = NamePrompt::new();
        assert!(prompt.submit().is_none());
        prompt.push_char(' ');
        assert!(prompt.submit().is_none());
        // 缓冲区保持不变，可以继续编辑
        assert_eq!(prompt.buffer(), " ");
    }

    #[test]
    fn test_submit_accepts_valid_name() {
        let mut prompt = NamePrompt::new();
        prompt.push_char('B');
        prompt.push_char('a');
        prompt.push_char('r');
        let name = prompt.submit().unwrap();
        assert_eq!(name.as_str(), "Bar");
    }
}

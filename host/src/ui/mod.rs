//! # UI 组件模块
//!
//! 主题、UI 上下文与图片按钮。

pub mod button;
pub mod theme;

pub use button::IconButton;
pub use theme::Theme;

use macroquad::prelude::*;

/// UI 上下文，存储 UI 渲染所需的共享状态
pub struct UiContext {
    /// 当前主题
    pub theme: Theme,
    /// 屏幕宽度
    pub screen_width: f32,
    /// 屏幕高度
    pub screen_height: f32,
    /// 鼠标位置
    pub mouse_pos: Vec2,
    /// 鼠标是否按下
    pub mouse_pressed: bool,
    /// 鼠标是否刚释放（本帧）
    pub mouse_just_released: bool,
}

impl UiContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            screen_width: 0.0,
            screen_height: 0.0,
            mouse_pos: Vec2::ZERO,
            mouse_pressed: false,
            mouse_just_released: false,
        }
    }

    /// 每帧更新状态
    pub fn update(&mut self) {
        self.screen_width = screen_width();
        self.screen_height = screen_height();
        self.mouse_pos = Vec2::new(mouse_position().0, mouse_position().1);
        self.mouse_pressed = is_mouse_button_down(MouseButton::Left);
        self.mouse_just_released = is_mouse_button_released(MouseButton::Left);
    }

    /// 检查鼠标是否在矩形内
    pub fn mouse_in_rect(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
    }
}

/// 以左上角坐标绘制文本
///
/// macroquad 的 `draw_text` 以基线为锚点；
/// 这里统一换算，调用方只需要关心文本块的左上角。
pub fn draw_text_top_left(text: &str, x: f32, y: f32, font_size: f32, color: Color) {
    draw_text(text, x, y + font_size * 0.75, font_size, color);
}

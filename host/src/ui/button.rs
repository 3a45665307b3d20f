//! # 图片按钮组件
//!
//! 以一张贴图为外观的固定命中区按钮。

use macroquad::prelude::*;

use super::UiContext;

/// 按钮状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

/// 图片按钮
///
/// 命中区就是贴图的绘制区域；悬停时描边提示。
pub struct IconButton {
    /// 按钮贴图
    texture: Texture2D,
    /// 命中区
    pub rect: Rect,
    /// 当前状态
    state: ButtonState,
}

impl IconButton {
    pub fn new(texture: Texture2D, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            texture,
            rect: Rect::new(x, y, w, h),
            state: ButtonState::Normal,
        }
    }

    /// 更新按钮状态并返回是否被点击（鼠标在命中区内释放）
    pub fn update(&mut self, ctx: &UiContext) -> bool {
        let (state, clicked) = step(self.rect, ctx);
        self.state = state;
        clicked
    }

    /// 绘制按钮
    pub fn draw(&self, ctx: &UiContext) {
        draw_texture(&self.texture, self.rect.x, self.rect.y, WHITE);

        if self.state != ButtonState::Normal {
            draw_rectangle_lines(
                self.rect.x,
                self.rect.y,
                self.rect.w,
                self.rect.h,
                3.0,
                ctx.theme.deep_blue,
            );
        }
    }

}

/// 按鼠标快照解算按钮状态与点击判定
///
/// 命中逻辑与贴图无关，单独拆出以便测试。
fn step(rect: Rect, ctx: &UiContext) -> (ButtonState, bool) {
    if !ctx.mouse_in_rect(rect) {
        return (ButtonState::Normal, false);
    }

    let state = if ctx.mouse_pressed {
        ButtonState::Pressed
    } else {
        ButtonState::Hovered
    };
    (state, ctx.mouse_just_released)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    const RECT: Rect = Rect {
        x: 10.0,
        y: 10.0,
        w: 100.0,
        h: 50.0,
    };

    fn ctx_at(x: f32, y: f32, pressed: bool, just_released: bool) -> UiContext {
        let mut ctx = UiContext::new(Theme::default());
        ctx.mouse_pos = Vec2::new(x, y);
        ctx.mouse_pressed = pressed;
        ctx.mouse_just_released = just_released;
        ctx
    }

    #[test]
    fn test_click_fires_on_release_inside_rect() {
        let (state, clicked) = step(RECT, &ctx_at(50.0, 30.0, false, true));
        assert_eq!(state, ButtonState::Hovered);
        assert!(clicked);
    }

    #[test]
    fn test_release_outside_rect_is_not_a_click() {
        let (state, clicked) = step(RECT, &ctx_at(200.0, 30.0, false, true));
        assert_eq!(state, ButtonState::Normal);
        assert!(!clicked);
    }

    #[test]
    fn test_hover_and_press_states() {
        let (state, clicked) = step(RECT, &ctx_at(50.0, 30.0, false, false));
        assert_eq!(state, ButtonState::Hovered);
        assert!(!clicked);

        // 按住但未释放：不触发点击
        let (state, clicked) = step(RECT, &ctx_at(50.0, 30.0, true, false));
        assert_eq!(state, ButtonState::Pressed);
        assert!(!clicked);
    }

    #[test]
    fn test_outside_rect_resets_to_normal() {
        let (state, clicked) = step(RECT, &ctx_at(0.0, 0.0, true, false));
        assert_eq!(state, ButtonState::Normal);
        assert!(!clicked);
    }
}

//! # Input 模块
//!
//! 输入采集：把 macroquad 的鼠标状态转换为 Core 的
//! [`SessionInput`] 指针事件。
//!
//! ## 设计说明
//!
//! - 每帧轮询一次，按「按下 → 移动 → 释放」的顺序产出事件
//! - 按住期间只有指针位置变化时才产出 PointerMoved
//! - 不认识的输入在 Core 侧静默忽略，这里不做过滤

use macroquad::prelude::*;

use trivia_core::{Point, SessionInput};

/// 输入管理器
#[derive(Debug, Default)]
pub struct InputManager {
    /// 上一帧指针位置（用于避免重复的移动事件）
    last_pointer: Option<Point>,
}

impl InputManager {
    pub fn new() -> Self {
        Self { last_pointer: None }
    }

    /// 采集本帧的指针事件
    pub fn poll(&mut self) -> Vec<SessionInput> {
        let (x, y) = mouse_position();
        let pointer = Point::new(x, y);
        let mut events = Vec::new();

        if is_mouse_button_pressed(MouseButton::Left) {
            events.push(SessionInput::PointerDown(pointer));
        }
        if is_mouse_button_down(MouseButton::Left) && self.last_pointer != Some(pointer) {
            events.push(SessionInput::PointerMoved(pointer));
        }
        if is_mouse_button_released(MouseButton::Left) {
            events.push(SessionInput::PointerUp(pointer));
        }

        self.last_pointer = Some(pointer);
        events
    }
}

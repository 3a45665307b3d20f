//! # UI 主题
//!
//! 定义 UI 的颜色与字号。调色板沿用原版棋盘配色。

use macroquad::prelude::Color;

/// UI 主题配置
#[derive(Debug, Clone)]
pub struct Theme {
    // ===== 颜色 =====
    /// 亮色文字 / 题目底板
    pub white: Color,
    /// 暗色文字
    pub black: Color,
    /// 深蓝（强调色）
    pub deep_blue: Color,
    /// True 答题区
    pub zone_true: Color,
    /// False 答题区
    pub zone_false: Color,

    // ===== 字号 =====
    /// 标题字号（结算画面、ABOUT 标题）
    pub font_size_title: f32,
    /// 大字号（玩家名输入）
    pub font_size_large: f32,
    /// 正常字号（题目文本）
    pub font_size_normal: f32,
    /// 说明文本字号（关于页面）
    pub font_size_text: f32,
    /// 小字号（提交提示）
    pub font_size_small: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            white: Color::from_rgba(235, 235, 235, 255),
            black: Color::from_rgba(0, 0, 0, 255),
            deep_blue: Color::from_rgba(29, 57, 101, 255),
            zone_true: Color::from_rgba(79, 187, 66, 255),
            zone_false: Color::from_rgba(209, 110, 111, 255),

            font_size_title: 80.0,
            font_size_large: 48.0,
            font_size_normal: 40.0,
            font_size_text: 30.0,
            font_size_small: 24.0,
        }
    }
}

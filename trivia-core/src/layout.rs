//! # Layout 模块
//!
//! 800×600 棋盘的固定几何常量。
//!
//! 所有数值与原版棋盘布局保持一致：
//! 题目出现在画面上方中部，两个答题区固定在画面下方两角。

use crate::geom::{Point, Rect};

/// 棋盘宽度
pub const BOARD_WIDTH: f32 = 800.0;
/// 棋盘高度
pub const BOARD_HEIGHT: f32 = 600.0;

/// 题目默认位置（每局开始 / reset 后恢复到这里）
pub const QUESTION_ORIGIN: Point = Point::new(145.0, 37.0);

/// 包围盒宽度：首行每字符占用的宽度
pub const CHAR_WIDTH: f32 = 15.0;
/// 包围盒高度：每行文本占用的高度
pub const LINE_HEIGHT: f32 = 40.0;
/// 渲染时相邻两行文本的纵向间距
pub const LINE_ADVANCE: f32 = 37.0;

/// "True" 答题区（画面左下角）
pub const TRUE_ZONE: Rect = Rect::new(0.0, 344.0, 256.0, 256.0);
/// "False" 答题区（画面右下角）
pub const FALSE_ZONE: Rect = Rect::new(544.0, 344.0, 256.0, 256.0);

/// 拖拽锚点：题目中心对齐指针，再向上偏移该值
pub const DRAG_ANCHOR_Y_OFFSET: f32 = 20.0;

/// 计分星标的纵向间距（第 n 题的星标画在 y = 32 × n）
pub const STAR_STEP: f32 = 32.0;

//! # Question 模块
//!
//! 题目实体：题面文本、正确答案、当前屏幕位置。
//!
//! ## 设计说明
//!
//! - 包围盒是**派生值**：由题面文本与当前位置即时计算，不单独存储
//! - `reset()` 是显式操作，只恢复位置，不重建实体
//! - 渲染由 Host 以 `&Question` 完成，绘制不会改变实体状态

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect};
use crate::layout::{CHAR_WIDTH, DRAG_ANCHOR_Y_OFFSET, LINE_HEIGHT, QUESTION_ORIGIN};

/// 真假题目
///
/// 题面可以是多行文本（以 `\n` 分隔）。
/// 包围盒宽度由首行长度决定，高度由行数决定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// 题面文本
    prompt: String,
    /// 正确答案
    answer: bool,
    /// 当前屏幕位置（包围盒左上角）
    position: Point,
}

impl Question {
    /// 创建新题目，位置为默认出题位置
    pub fn new(prompt: impl Into<String>, answer: bool) -> Self {
        Self {
            prompt: prompt.into(),
            answer,
            position: QUESTION_ORIGIN,
        }
    }

    /// 题面文本
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// 正确答案
    pub fn answer(&self) -> bool {
        self.answer
    }

    /// 当前位置（包围盒左上角）
    pub fn position(&self) -> Point {
        self.position
    }

    /// 题面按行拆分
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.prompt.split('\n')
    }

    /// 行数
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// 从当前位置与题面文本派生包围盒
    ///
    /// 宽度 = 首行字符数 × [`CHAR_WIDTH`]，
    /// 高度 = 行数 × [`LINE_HEIGHT`]。
    pub fn bounding_box(&self) -> Rect {
        let first_line_chars = self.lines().next().unwrap_or("").chars().count();
        Rect::new(
            self.position.x,
            self.position.y,
            CHAR_WIDTH * first_line_chars as f32,
            LINE_HEIGHT * self.line_count() as f32,
        )
    }

    /// 恢复默认位置
    ///
    /// 幂等：连续调用多次，位置与包围盒保持不变。
    pub fn reset(&mut self) {
        self.position = QUESTION_ORIGIN;
    }

    /// 直接设置位置
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// 拖拽跟随：包围盒中心对齐指针，并向上偏移锚点值
    pub fn drag_to(&mut self, pointer: Point) {
        let bb = self.bounding_box();
        self.position = Point::new(
            pointer.x - bb.w / 2.0,
            pointer.y - bb.h / 2.0 - DRAG_ANCHOR_Y_OFFSET,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_single_line() {
        let q = Question::new("Earth is flat.", false);
        let bb = q.bounding_box();
        assert_eq!(bb.x, 145.0);
        assert_eq!(bb.y, 37.0);
        assert_eq!(bb.w, 15.0 * 14.0);
        assert_eq!(bb.h, 40.0);
    }

    #[test]
    fn test_bounding_box_multi_line_uses_first_line_width() {
        let q = Question::new("The Dead Sea\nis red.", false);
        let bb = q.bounding_box();
        assert_eq!(bb.w, 15.0 * 12.0);
        assert_eq!(bb.h, 80.0);
        assert_eq!(q.line_count(), 2);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut q = Question::new("Spiders have six legs", false);
        q.drag_to(Point::new(400.0, 300.0));
        assert_ne!(q.position(), QUESTION_ORIGIN);

        q.reset();
        let pos1 = q.position();
        let bb1 = q.bounding_box();
        q.reset();
        assert_eq!(q.position(), pos1);
        assert_eq!(q.bounding_box(), bb1);
        assert_eq!(pos1, QUESTION_ORIGIN);
    }

    #[test]
    fn test_drag_to_centers_with_anchor_offset() {
        let mut q = Question::new("Ice cream is made from milk.", true);
        let bb = q.bounding_box();
        q.drag_to(Point::new(400.0, 300.0));
        assert_eq!(q.position().x, 400.0 - bb.w / 2.0);
        assert_eq!(q.position().y, 300.0 - bb.h / 2.0 - 20.0);
    }

    #[test]
    fn test_bounding_box_follows_position() {
        let mut q = Question::new("The Dead Sea is red.", false);
        q.set_position(Point::new(10.0, 10.0));
        let bb = q.bounding_box();
        assert_eq!((bb.x, bb.y), (10.0, 10.0));
    }
}

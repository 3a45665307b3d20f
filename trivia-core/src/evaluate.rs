//! # Evaluate 模块
//!
//! 答案判定：根据指针释放位置与两个答题区，判定本次作答结果。
//!
//! ## 设计说明
//!
//! 判定本身是**纯函数**，不产生任何副作用。
//! 音效反馈由会话状态机以 [`Command`](crate::session::Command)
//! 的形式发给 Host：Correct / Incorrect 各对应一条播放指令，
//! NoAnswer 不产生指令。

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect};

/// 作答判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// 答对
    Correct,
    /// 答错
    Incorrect,
    /// 未落入任何答题区，本次释放不算作答
    NoAnswer,
}

impl Verdict {
    /// 是否构成一次有效作答
    pub fn is_answered(&self) -> bool {
        !matches!(self, Self::NoAnswer)
    }
}

/// 判定一次指针释放
///
/// - 落在 `true_zone` 内：答案为真则 Correct，否则 Incorrect
/// - 落在 `false_zone` 内：答案为假则 Correct，否则 Incorrect
/// - 两个区域都不命中：NoAnswer
///
/// true 区先判定，若两区重叠以 true 区为准。
pub fn evaluate(pointer: Point, true_zone: Rect, false_zone: Rect, answer: bool) -> Verdict {
    if true_zone.contains(pointer) {
        return if answer {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
    }
    if false_zone.contains(pointer) {
        return if !answer {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
    }
    Verdict::NoAnswer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FALSE_ZONE, TRUE_ZONE};

    #[test]
    fn test_true_zone_verdicts() {
        let p = TRUE_ZONE.center();
        assert_eq!(evaluate(p, TRUE_ZONE, FALSE_ZONE, true), Verdict::Correct);
        assert_eq!(evaluate(p, TRUE_ZONE, FALSE_ZONE, false), Verdict::Incorrect);
    }

    #[test]
    fn test_false_zone_verdicts() {
        let p = FALSE_ZONE.center();
        assert_eq!(evaluate(p, TRUE_ZONE, FALSE_ZONE, false), Verdict::Correct);
        assert_eq!(evaluate(p, TRUE_ZONE, FALSE_ZONE, true), Verdict::Incorrect);
    }

    #[test]
    fn test_outside_both_zones_is_no_answer() {
        // 两区之间的空隙
        let p = Point::new(400.0, 472.0);
        assert_eq!(evaluate(p, TRUE_ZONE, FALSE_ZONE, true), Verdict::NoAnswer);
        // 棋盘上方
        let p = Point::new(400.0, 100.0);
        assert_eq!(evaluate(p, TRUE_ZONE, FALSE_ZONE, false), Verdict::NoAnswer);
    }

    #[test]
    fn test_overlapping_zones_prefer_true() {
        let zone = Rect::new(0.0, 0.0, 100.0, 100.0);
        let p = Point::new(50.0, 50.0);
        assert_eq!(evaluate(p, zone, zone, true), Verdict::Correct);
        assert_eq!(evaluate(p, zone, zone, false), Verdict::Incorrect);
    }

    #[test]
    fn test_is_answered() {
        assert!(Verdict::Correct.is_answered());
        assert!(Verdict::Incorrect.is_answered());
        assert!(!Verdict::NoAnswer.is_answered());
    }
}

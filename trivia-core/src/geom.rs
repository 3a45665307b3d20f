//! # Geom 模块
//!
//! 基础几何类型（点与轴对齐矩形）。
//!
//! Core 不依赖渲染引擎，因此自带最小几何类型；
//! Host 负责与引擎侧类型互转。

use serde::{Deserialize, Serialize};

/// 逻辑坐标系中的一个点
///
/// 坐标系与屏幕一致：原点在左上角，y 轴向下。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 轴对齐矩形
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// 检查点是否落在矩形内（边界含端点）
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    /// 矩形中心点
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inside_and_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(50.0, 40.0)));
        // 边界含端点
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(110.0, 70.0)));
    }

    #[test]
    fn test_contains_outside() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(!rect.contains(Point::new(9.9, 40.0)));
        assert!(!rect.contains(Point::new(50.0, 70.1)));
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(0.0, 344.0, 256.0, 256.0);
        assert_eq!(rect.center(), Point::new(128.0, 472.0));
    }
}

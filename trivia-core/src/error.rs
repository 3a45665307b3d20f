//! # Error 模块
//!
//! 定义 trivia-core 中使用的错误类型。

use thiserror::Error;

/// 会话错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// 会话已结束，不再接受输入
    #[error("会话已结束，不再接受输入")]
    SessionOver,
}

/// 玩家名校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// 为空或仅包含空白字符
    #[error("玩家名不能为空或仅包含空白字符")]
    Blank,
}

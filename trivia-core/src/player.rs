//! # Player 模块
//!
//! 玩家身份：经过校验的玩家名。
//!
//! 校验规则：提交时不能为空，也不能只由空白字符组成。
//! 通过校验的输入原样保留（不做修剪或大小写处理）。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NameError;

/// 经过校验的玩家名
///
/// 只能通过 [`Username::parse`] 构造，保证非空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// 校验并构造玩家名
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        if raw.trim().is_empty() {
            return Err(NameError::Blank);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! # Trivia Core
//!
//! 真假问答游戏的核心逻辑库。
//!
//! ## 架构概述
//!
//! `trivia-core` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 它通过 **命令驱动模式** 与宿主层（Host）通信：
//!
//! ```text
//! Host                          Core
//!   │                             │
//!   │──── SessionInput ─────────►│
//!   │                             │ handle_input()
//!   │◄─── Vec<Command> ──────────│
//!   │                             │
//! ```
//!
//! Host 负责采集指针事件并转换为 [`SessionInput`]；
//! Core 推进会话状态机，并以 [`Command`] 告知 Host
//! 需要执行的副作用（播放音效、展示结算画面）。
//!
//! ## 核心类型
//!
//! - [`Question`]：题目实体（题面、答案、位置、包围盒）
//! - [`Session`]：一局游戏的状态机（拖拽、判定、计分）
//! - [`Verdict`]：答案判定结果
//! - [`Username`]：经过校验的玩家名
//!
//! ## 模块结构
//!
//! - [`geom`]：点与矩形
//! - [`layout`]：800×600 棋盘的固定几何常量
//! - [`question`]：题目实体
//! - [`bank`]：内置题库
//! - [`evaluate`]：答案判定
//! - [`session`]：会话状态机
//! - [`player`]：玩家名校验
//! - [`error`]：错误类型定义

pub mod bank;
pub mod error;
pub mod evaluate;
pub mod geom;
pub mod layout;
pub mod player;
pub mod question;
pub mod session;

// 重导出核心类型
pub use bank::builtin_questions;
pub use error::{NameError, SessionError};
pub use evaluate::{Verdict, evaluate};
pub use geom::{Point, Rect};
pub use player::Username;
pub use question::Question;
pub use session::{Command, Phase, Session, SessionInput, SoundCue, Summary};

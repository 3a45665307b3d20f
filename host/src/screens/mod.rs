//! # Screens 模块
//!
//! 各界面的状态与绘制。
//!
//! 每个界面遵循同一模式：`update` 处理输入并返回动作枚举，
//! `draw` 只读绘制；界面切换由路由器根据动作完成。

pub mod about;
pub mod game;
pub mod menu;
pub mod name_prompt;

pub use about::{AboutAction, AboutScreen};
pub use game::{GameAction, GameScreen};
pub use menu::{MenuAction, MenuScreen};
pub use name_prompt::{NamePrompt, PromptAction};

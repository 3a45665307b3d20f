//! # 游戏界面
//!
//! 一局游戏的宿主侧：玩家名输入 → 答题 → 结算三个阶段。
//!
//! ## 设计说明
//!
//! - 答题阶段只做两件事：把指针事件喂给 Core 的 [`Session`]，
//!   并把返回的 [`Command`] 上交给路由器执行（音效播放）
//! - 结算画面停留固定时长后返回主菜单
//! - 绘制全部以 `&` 借用完成，不改变任何实体状态

use macroquad::prelude::*;

use trivia_core::{
    Command, Question, Session, SessionInput, Summary, Username, builtin_questions, layout,
};

use crate::resources::Assets;
use crate::screens::name_prompt::{NamePrompt, PromptAction};
use crate::ui::{UiContext, draw_text_top_left};

/// 结算画面停留时长（秒）
pub const SUMMARY_HOLD_SECONDS: f32 = 5.0;

/// 游戏界面动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    None,
    /// 结算画面展示完毕，返回主菜单
    ReturnToMenu,
}

/// 一局游戏的阶段
enum GameStage {
    /// 输入玩家名
    EnterName(NamePrompt),
    /// 答题中
    Playing(Session),
    /// 展示结算画面
    Summary {
        summary: Summary,
        /// 已停留时长（秒）
        elapsed: f32,
    },
}

/// 游戏界面
pub struct GameScreen {
    stage: GameStage,
    /// 本局玩家名；输入阶段结束后为 Some
    username: Option<Username>,
}

impl GameScreen {
    /// 创建新的一局，从玩家名输入开始
    pub fn new() -> Self {
        Self {
            stage: GameStage::EnterName(NamePrompt::new()),
            username: None,
        }
    }

    /// 更新界面
    ///
    /// 返回界面动作与本帧需要执行的 Core 指令。
    pub fn update(&mut self, dt: f32, pointer_events: &[SessionInput]) -> (GameAction, Vec<Command>) {
        match &mut self.stage {
            GameStage::EnterName(prompt) => {
                if let PromptAction::Submitted(name) = prompt.update() {
                    self.username = Some(name);
                    self.stage = GameStage::Playing(Session::new(builtin_questions()));
                }
                (GameAction::None, Vec::new())
            }
            GameStage::Playing(session) => {
                let mut commands = Vec::new();
                for event in pointer_events {
                    match session.handle_input(*event) {
                        Ok(mut produced) => commands.append(&mut produced),
                        // 会话已结束：残留的指针事件直接丢弃
                        Err(_) => break,
                    }
                }

                let finished = commands.iter().find_map(|c| match c {
                    Command::Finished(summary) => Some(*summary),
                    _ => None,
                });
                if let Some(summary) = finished {
                    self.stage = GameStage::Summary {
                        summary,
                        elapsed: 0.0,
                    };
                }
                (GameAction::None, commands)
            }
            GameStage::Summary { elapsed, .. } => {
                *elapsed += dt;
                if *elapsed >= SUMMARY_HOLD_SECONDS {
                    (GameAction::ReturnToMenu, Vec::new())
                } else {
                    (GameAction::None, Vec::new())
                }
            }
        }
    }

    /// 绘制界面
    pub fn draw(&self, ctx: &UiContext, assets: &Assets) {
        match &self.stage {
            GameStage::EnterName(prompt) => prompt.draw(ctx),
            GameStage::Playing(session) => self.draw_board(ctx, assets, session),
            GameStage::Summary { summary, .. } => self.draw_summary(ctx, summary),
        }
    }

    /// 绘制答题棋盘：背景、答题区、当前题目、计分星标
    fn draw_board(&self, ctx: &UiContext, assets: &Assets, session: &Session) {
        let theme = &ctx.theme;

        draw_texture(&assets.brick_wall, 0.0, 0.0, WHITE);

        let tz = layout::TRUE_ZONE;
        let fz = layout::FALSE_ZONE;
        draw_rectangle(tz.x, tz.y, tz.w, tz.h, theme.zone_true);
        draw_rectangle(fz.x, fz.y, fz.w, fz.h, theme.zone_false);
        draw_texture(&assets.true_stamp, tz.x, tz.y, WHITE);
        draw_texture(&assets.false_stamp, fz.x, fz.y, WHITE);

        if let Some(question) = session.active_question() {
            self.draw_question(ctx, question);
        }

        self.draw_stars(assets, session);
    }

    /// 绘制题目：白色底板加逐行文本
    fn draw_question(&self, ctx: &UiContext, question: &Question) {
        let theme = &ctx.theme;
        let bb = question.bounding_box();

        draw_rectangle(bb.x, bb.y, bb.w, bb.h, theme.white);

        let mut y = bb.y;
        for line in question.lines() {
            draw_text_top_left(line, bb.x, y, theme.font_size_normal, theme.black);
            y += layout::LINE_ADVANCE;
        }
    }

    /// 绘制计分星标：答对画金星，答错画灰星
    fn draw_stars(&self, assets: &Assets, session: &Session) {
        for round in 1..=session.answered() {
            let star = if session.correct_rounds().contains(&round) {
                &assets.gold_star
            } else {
                &assets.gray_star
            };
            draw_texture(star, 0.0, layout::STAR_STEP * round as f32, WHITE);
        }
    }

    /// 绘制结算画面
    fn draw_summary(&self, ctx: &UiContext, summary: &Summary) {
        let theme = &ctx.theme;

        draw_rectangle(0.0, 60.0, ctx.screen_width, 200.0, theme.white);

        let goodbye = match &self.username {
            Some(name) => format!("Goodbye {name}!"),
            None => "Goodbye!".to_string(),
        };
        draw_text_top_left(&goodbye, 200.0, 100.0, theme.font_size_title, theme.black);
        draw_text_top_left(
            &format!("your score is {}", summary.score_fraction()),
            200.0,
            170.0,
            theme.font_size_title,
            theme.black,
        );
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::{Point, SoundCue};

    /// 直接从答题阶段构造界面（跳过需要窗口环境的输入阶段）
    fn playing_screen(session: Session) -> GameScreen {
        GameScreen {
            stage: GameStage::Playing(session),
            username: Username::parse("Bar").ok(),
        }
    }

    /// 作答当前题目的指针事件序列
    fn answer_events(session: &Session, correctly: bool) -> Vec<SessionInput> {
        let question = session.active_question().unwrap();
        let zone = if question.answer() == correctly {
            layout::TRUE_ZONE
        } else {
            layout::FALSE_ZONE
        };
        vec![
            SessionInput::PointerDown(question.bounding_box().center()),
            SessionInput::PointerUp(zone.center()),
        ]
    }

    #[test]
    fn test_playing_forwards_commands() {
        let questions = vec![
            Question::new("Earth is flat.", false),
            Question::new("Ice cream is made from milk.", true),
        ];
        let mut screen = playing_screen(Session::with_seed(questions, 1));

        let GameStage::Playing(session) = &screen.stage else {
            unreachable!()
        };
        let events = answer_events(session, true);
        let (action, commands) = screen.update(0.016, &events);

        assert_eq!(action, GameAction::None);
        assert_eq!(commands, vec![Command::PlaySound(SoundCue::Correct)]);
    }

    #[test]
    fn test_finish_switches_to_summary_stage() {
        let questions = vec![Question::new("Earth is flat.", false)];
        let mut screen = playing_screen(Session::with_seed(questions, 2));

        let GameStage::Playing(session) = &screen.stage else {
            unreachable!()
        };
        let events = answer_events(session, true);
        let (_, commands) = screen.update(0.016, &events);

        assert!(commands.contains(&Command::PlaySound(SoundCue::GameOver)));
        match &screen.stage {
            GameStage::Summary { summary, .. } => {
                assert_eq!(summary.score_fraction(), "1/1");
            }
            _ => panic!("expected summary stage"),
        }
    }

    #[test]
    fn test_summary_holds_then_returns_to_menu() {
        let mut screen = GameScreen {
            stage: GameStage::Summary {
                summary: Summary {
                    answered: 2,
                    correct: 2,
                    total: 2,
                },
                elapsed: 0.0,
            },
            username: Username::parse("Bar").ok(),
        };

        let (action, _) = screen.update(SUMMARY_HOLD_SECONDS - 0.1, &[]);
        assert_eq!(action, GameAction::None);
        let (action, _) = screen.update(0.2, &[]);
        assert_eq!(action, GameAction::ReturnToMenu);
    }

    #[test]
    fn test_events_after_finish_are_dropped() {
        let questions = vec![Question::new("Earth is flat.", false)];
        let mut screen = playing_screen(Session::with_seed(questions, 3));

        let GameStage::Playing(session) = &screen.stage else {
            unreachable!()
        };
        let mut events = answer_events(session, true);
        // 结束后残留的事件不应引发错误或额外指令
        events.push(SessionInput::PointerDown(Point::new(0.0, 0.0)));
        let (_, commands) = screen.update(0.016, &events);

        let plays = commands
            .iter()
            .filter(|c| matches!(c, Command::PlaySound(_)))
            .count();
        assert_eq!(plays, 2); // Correct + GameOver
    }
}

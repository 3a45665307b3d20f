//! # Session 模块
//!
//! 一局游戏的状态机：拖拽手势、答案判定、计分与结算。
//!
//! ## 执行模型
//!
//! ```text
//! handle_input(input) -> Result<Vec<Command>, SessionError>
//! ```
//!
//! 1. 根据当前阶段处理指针事件
//! 2. 释放在答题区内时判定作答，推进到下一题
//! 3. 返回本次产生的 Command（音效、结算）
//!
//! ## 阶段转换
//!
//! ```text
//! AwaitingPick --按下且命中题目包围盒--> Dragging
//! Dragging     --移动--> Dragging（题目跟随指针）
//! Dragging     --释放在答题区内--> AwaitingPick（下一题）或 Finished
//! Dragging     --释放在答题区外--> Dragging（不消耗回合）
//! ```
//!
//! 出题顺序：每次从剩余题目中均匀随机抽取一题；
//! 题目只在被作答后移出剩余集合，因此一局内每道题
//! 恰好出现一次，顺序随机但覆盖完整。

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::evaluate::{Verdict, evaluate};
use crate::geom::Point;
use crate::layout::{FALSE_ZONE, TRUE_ZONE};
use crate::question::Question;

/// 会话阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// 等待玩家拿起当前题目
    AwaitingPick,
    /// 题目被拖拽中，跟随指针
    Dragging,
    /// 所有题目已作答完毕
    Finished,
}

/// Host 传入的指针事件
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SessionInput {
    /// 指针按下
    PointerDown(Point),
    /// 指针移动（按住期间）
    PointerMoved(Point),
    /// 指针释放
    PointerUp(Point),
}

/// 反馈音效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// 答对音效
    Correct,
    /// 答错音效
    Incorrect,
    /// 结算音效
    GameOver,
}

/// 会话向 Host 发出的指令
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// 播放一次音效
    PlaySound(SoundCue),
    /// 会话结束，展示结算画面
    Finished(Summary),
}

/// 结算摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// 已作答题数
    pub answered: u32,
    /// 答对题数
    pub correct: u32,
    /// 题目总数
    pub total: u32,
}

impl Summary {
    /// 形如 "7/9" 的得分文本
    pub fn score_fraction(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

/// 一局游戏的状态机
///
/// 持有本局的全部题目；`remaining` 存放未作答题目在
/// `questions` 中的下标，当前题目以 `active_slot`
/// （`remaining` 中的槽位）标识。
pub struct Session {
    /// 本局全部题目
    questions: Vec<Question>,
    /// 未作答题目的下标集合
    remaining: Vec<usize>,
    /// 当前题目在 `remaining` 中的槽位；Finished 后为 None
    active_slot: Option<usize>,
    /// 当前阶段
    phase: Phase,
    /// 已作答题数
    answered: u32,
    /// 答对题目的回合序号（从 1 开始）
    correct_rounds: Vec<u32>,
    /// 随机数源
    rng: fastrand::Rng,
}

impl Session {
    /// 创建新会话
    ///
    /// 所有题目会被 reset 回默认位置，并立即抽出第一题。
    /// 空题目列表直接进入 Finished。
    pub fn new(questions: Vec<Question>) -> Self {
        Self::with_rng(questions, fastrand::Rng::new())
    }

    /// 以固定随机种子创建会话（用于可复现的测试）
    pub fn with_seed(questions: Vec<Question>, seed: u64) -> Self {
        Self::with_rng(questions, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(mut questions: Vec<Question>, rng: fastrand::Rng) -> Self {
        for q in &mut questions {
            q.reset();
        }
        let remaining: Vec<usize> = (0..questions.len()).collect();
        let mut session = Self {
            questions,
            remaining,
            active_slot: None,
            phase: Phase::AwaitingPick,
            answered: 0,
            correct_rounds: Vec::new(),
            rng,
        };
        session.draw_next();
        session
    }

    /// 从剩余集合中均匀随机抽取下一题
    fn draw_next(&mut self) {
        if self.remaining.is_empty() {
            self.active_slot = None;
            self.phase = Phase::Finished;
        } else {
            self.active_slot = Some(self.rng.usize(..self.remaining.len()));
            self.phase = Phase::AwaitingPick;
        }
    }

    /// 核心驱动函数
    ///
    /// 根据指针事件推进状态机，返回本次产生的指令。
    /// 未被当前阶段识别的输入静默忽略，不改变任何状态。
    pub fn handle_input(&mut self, input: SessionInput) -> Result<Vec<Command>, SessionError> {
        if self.phase == Phase::Finished {
            return Err(SessionError::SessionOver);
        }

        let mut commands = Vec::new();
        let Some(slot) = self.active_slot else {
            return Ok(commands);
        };
        let question_index = self.remaining[slot];

        match (self.phase, input) {
            (Phase::AwaitingPick, SessionInput::PointerDown(p)) => {
                // 只有按在题目包围盒内才开始拖拽
                if self.questions[question_index].bounding_box().contains(p) {
                    self.phase = Phase::Dragging;
                }
            }
            (Phase::Dragging, SessionInput::PointerMoved(p)) => {
                self.questions[question_index].drag_to(p);
            }
            (Phase::Dragging, SessionInput::PointerUp(p)) => {
                let answer = self.questions[question_index].answer();
                match evaluate(p, TRUE_ZONE, FALSE_ZONE, answer) {
                    Verdict::NoAnswer => {
                        // 释放在答题区外不消耗回合，保持拖拽
                    }
                    verdict => {
                        let cue = if verdict == Verdict::Correct {
                            SoundCue::Correct
                        } else {
                            SoundCue::Incorrect
                        };
                        commands.push(Command::PlaySound(cue));

                        self.answered += 1;
                        if verdict == Verdict::Correct {
                            self.correct_rounds.push(self.answered);
                        }
                        self.remaining.swap_remove(slot);
                        self.draw_next();

                        if self.phase == Phase::Finished {
                            commands.push(Command::PlaySound(SoundCue::GameOver));
                            commands.push(Command::Finished(self.summary()));
                        }
                    }
                }
            }
            _ => {
                // 其他组合（如未拿起时的释放）不改变状态
            }
        }

        Ok(commands)
    }

    /// 当前阶段
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 当前题目；Finished 后为 None
    pub fn active_question(&self) -> Option<&Question> {
        self.active_slot.map(|slot| &self.questions[self.remaining[slot]])
    }

    /// 已作答题数
    pub fn answered(&self) -> u32 {
        self.answered
    }

    /// 题目总数
    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// 答对题数
    pub fn correct_count(&self) -> u32 {
        self.correct_rounds.len() as u32
    }

    /// 答对题目的回合序号（从 1 开始，用于计分星标）
    pub fn correct_rounds(&self) -> &[u32] {
        &self.correct_rounds
    }

    /// 剩余未作答题数
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// 结算摘要
    pub fn summary(&self) -> Summary {
        Summary {
            answered: self.answered,
            correct: self.correct_count(),
            total: self.total(),
        }
    }
}

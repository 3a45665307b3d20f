//! # Bank 模块
//!
//! 内置题库。
//!
//! 题库在进程内固定不变，每局游戏从这里构造一份新的题目列表。
//! 不支持从外部数据加载题目。

use crate::question::Question;

/// 内置的九道真假题（题面，正确答案）
const BANK: &[(&str, bool)] = &[
    ("Abraham Lincoln was the\nfirst president of the USA.", false),
    ("The Dead Sea is red.", false),
    ("The Blue Whale is the  \nbiggest creature on Earth.", true),
    ("Ice cream is made from milk.", true),
    (
        "The names of the creators of\nthe game are Bar and Jonathan.",
        true,
    ),
    ("World War II was ended in 1954", false),
    ("Spiders have six legs", false),
    ("Earth is flat.", false),
    ("A human can survive without food for 3 months.", false),
];

/// 构造一份内置题目列表
///
/// 每次调用返回全新的实体，位置均为默认出题位置。
pub fn builtin_questions() -> Vec<Question> {
    BANK.iter()
        .map(|(prompt, answer)| Question::new(*prompt, *answer))
        .collect()
}

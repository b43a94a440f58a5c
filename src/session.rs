//! 答题会话模块
//!
//! 持有一份已加载测验的用户选择状态，并提供一次性的判分操作。
//!
//! 状态机只有两个状态：
//! - `Open`: 接受选择，可随意改答案
//! - `Graded`: 终态，分数固定，任何修改都被拒绝
//!
//! 唯一的迁移是 `Open → Graded`，由 `grade()` 触发，且只发生一次。

use crate::error::SessionError;
use crate::models::{label_for_position, Quiz};
use std::collections::HashMap;

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// 接受选择
    Open,
    /// 已判分，不可再修改
    Graded,
}

/// 单个选项的判分标记
///
/// 展示层据此把选项画成中性 / 正确 / 选错三种样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    /// 未选中且不是正确答案
    Neutral,
    /// 正确答案（无论是否被选中）
    Correct,
    /// 被选中但不是正确答案
    SelectedWrong,
}

/// 单道题的判分结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    /// 该题是否答对
    pub correct: bool,
    /// 每个选项的标记，按选项顺序排列
    pub marks: Vec<ChoiceMark>,
}

/// 判分报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    /// 答对题数
    pub score: usize,
    /// 题目总数
    pub total: usize,
    /// 每道题的结果，按题目顺序排列
    pub questions: Vec<QuestionResult>,
}

/// 答题会话
///
/// 会话独占持有一份测验；换一份测验需要新建会话，没有"重做"操作
#[derive(Debug)]
pub struct QuizSession {
    quiz: Quiz,
    /// 题目索引 → 已选标签；缺项表示未作答
    selections: HashMap<usize, char>,
    /// 判分后填入，同时意味着进入 Graded 状态
    report: Option<GradeReport>,
}

impl QuizSession {
    /// 基于已加载的测验创建空会话
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            selections: HashMap::new(),
            report: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn state(&self) -> SessionState {
        if self.report.is_some() {
            SessionState::Graded
        } else {
            SessionState::Open
        }
    }

    pub fn is_graded(&self) -> bool {
        self.report.is_some()
    }

    /// 判分后的分数；未判分时返回 None
    pub fn score(&self) -> Option<usize> {
        self.report.as_ref().map(|r| r.score)
    }

    /// 判分报告；未判分时返回 None
    pub fn report(&self) -> Option<&GradeReport> {
        self.report.as_ref()
    }

    /// 某道题当前的选择
    pub fn selection(&self, question_index: usize) -> Option<char> {
        self.selections.get(&question_index).copied()
    }

    /// 记录一次选择
    ///
    /// 覆盖该题之前的选择（提交前允许改答案）。
    ///
    /// # 参数
    /// - `question_index`: 题目的 0 起始索引
    /// - `label`: 选项标签，必须是该题的有效计算标签
    ///
    /// # 返回
    /// 被拒绝时返回错误，状态不变；错误只供调用方记日志，不应向上抛为故障
    pub fn select(&mut self, question_index: usize, label: char) -> Result<(), SessionError> {
        if self.is_graded() {
            return Err(SessionError::AlreadyGraded);
        }

        let question = self.quiz.question(question_index).ok_or(
            SessionError::QuestionIndexOutOfRange {
                index: question_index,
                question_count: self.quiz.question_count(),
            },
        )?;

        if !question.has_label(label) {
            return Err(SessionError::UnknownLabel {
                label,
                choice_count: question.choices.len(),
            });
        }

        self.selections.insert(question_index, label);
        Ok(())
    }

    /// 判分
    ///
    /// 第一次调用时遍历全部题目计分并进入 Graded 状态；
    /// 之后的调用直接返回已有报告，不重新计算（幂等）。
    ///
    /// 未作答的题目永远不计为正确；`answer` 不匹配任何选项标签的题目同理。
    pub fn grade(&mut self) -> &GradeReport {
        let quiz = &self.quiz;
        let selections = &self.selections;
        self.report
            .get_or_insert_with(|| compute_report(quiz, selections))
    }

    // ========== 展示层只读派生查询 ==========

    /// 该选项当前是否被选中
    pub fn is_selected(&self, question_index: usize, label: char) -> bool {
        self.selection(question_index) == Some(label)
    }

    /// 该选项是否是正确答案（判分前恒为 false）
    pub fn is_correct_choice(&self, question_index: usize, label: char) -> bool {
        if !self.is_graded() {
            return false;
        }
        self.quiz
            .question(question_index)
            .and_then(|q| q.answer_label())
            == Some(label)
    }

    /// 该选项是否被选中且选错（判分前恒为 false）
    pub fn is_selected_wrong(&self, question_index: usize, label: char) -> bool {
        self.is_graded()
            && self.is_selected(question_index, label)
            && !self.is_correct_choice(question_index, label)
    }

    /// 按选项位置给出判分标记
    ///
    /// 等价于 `grade()` 报告里的标记，但对未判分会话也可调用（此时恒为中性）
    pub fn choice_mark(&self, question_index: usize, position: usize) -> ChoiceMark {
        match label_for_position(position) {
            Some(label) if self.is_correct_choice(question_index, label) => ChoiceMark::Correct,
            Some(label) if self.is_selected_wrong(question_index, label) => {
                ChoiceMark::SelectedWrong
            }
            _ => ChoiceMark::Neutral,
        }
    }
}

/// 遍历全部题目计算判分报告
///
/// 报告与状态迁移由 `grade()` 一并写入，调用方观察不到中间状态
fn compute_report(quiz: &Quiz, selections: &HashMap<usize, char>) -> GradeReport {
    let mut score = 0;
    let mut questions = Vec::with_capacity(quiz.question_count());

    for (index, question) in quiz.mcqs.iter().enumerate() {
        let selected = selections.get(&index).copied();
        let answer = question.answer_label();
        // 未作答不计分；answer 不匹配任何标签时 answer_label 仍可能有值，
        // 但用户选不到范围外的标签，所以这样的题自然永远不正确
        let correct = selected.is_some() && selected == answer;

        if correct {
            score += 1;
        }

        let marks = (0..question.choices.len())
            .map(|position| {
                let label = label_for_position(position);
                if label.is_some() && label == answer {
                    ChoiceMark::Correct
                } else if label.is_some() && label == selected {
                    ChoiceMark::SelectedWrong
                } else {
                    ChoiceMark::Neutral
                }
            })
            .collect();

        questions.push(QuestionResult { correct, marks });
    }

    GradeReport {
        score,
        total: quiz.question_count(),
        questions,
    }
}

use crate::models::label::label_for_position;
use serde::{Deserialize, Serialize};

/// 测验文档
///
/// 服务端返回的 JSON 形如：
/// `{ "mcqs": [ { "statement": "...", "choices": ["...", ...], "answer": "a" } ] }`
///
/// 题目顺序即展示顺序，也是选择记录的索引顺序。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub mcqs: Vec<Question>,
}

impl Quiz {
    /// 题目总数
    pub fn question_count(&self) -> usize {
        self.mcqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mcqs.is_empty()
    }

    /// 按索引获取题目
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.mcqs.get(index)
    }
}

/// 单道选择题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 题干
    pub statement: String,
    /// 选项列表，顺序决定每个选项的标签
    #[serde(default)]
    pub choices: Vec<String>,
    /// 正确选项的标签（"a"、"b"……）
    pub answer: String,
}

impl Question {
    /// 解析正确答案标签
    ///
    /// # 返回
    /// `answer` 恰好是一个字符时返回该字符，否则返回 None
    pub fn answer_label(&self) -> Option<char> {
        let mut chars = self.answer.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// 判断题目是否可判分
    ///
    /// `answer` 必须对应 `choices` 中某个位置的计算标签，
    /// 否则该题无论怎么选都不会计为正确
    pub fn is_gradable(&self) -> bool {
        match self.answer_label() {
            Some(label) => {
                (0..self.choices.len()).any(|position| label_for_position(position) == Some(label))
            }
            None => false,
        }
    }

    /// 判断标签是否是本题的有效选项标签
    pub fn has_label(&self, label: char) -> bool {
        (0..self.choices.len()).any(|position| label_for_position(position) == Some(label))
    }
}

//! 作答上下文
//!
//! 封装"我正在作答第几页的第几题"这一信息

use std::fmt::Display;

/// 页面上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCtx {
    /// 页码（从1开始）
    pub page_index: usize,
    /// 总页数
    pub total_pages: usize,
    /// 本页第一题的索引（从0开始）
    pub first_question: usize,
    /// 本页题目数
    pub question_count: usize,
}

impl PageCtx {
    /// 按每页题目数切分出第 `page_index` 页（从1开始）
    pub fn new(page_index: usize, questions_per_page: usize, total_questions: usize) -> Self {
        let first_question = (page_index - 1) * questions_per_page;
        let question_count = questions_per_page.min(total_questions - first_question);
        Self {
            page_index,
            total_pages: total_questions.div_ceil(questions_per_page),
            first_question,
            question_count,
        }
    }

    /// 本页题目索引范围
    pub fn questions(&self) -> std::ops::Range<usize> {
        self.first_question..self.first_question + self.question_count
    }

    pub fn is_last(&self) -> bool {
        self.page_index == self.total_pages
    }
}

impl Display for PageCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[第 {}/{} 页]", self.page_index, self.total_pages)
    }
}

/// 题目上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionCtx {
    /// 页码（从1开始，仅用于日志显示）
    pub page_index: usize,
    /// 题目索引（从0开始，与答案表一致）
    pub question_index: usize,
    /// 题目总数
    pub total_questions: usize,
    /// 本题选项数
    pub num_options: usize,
}

impl QuestionCtx {
    pub fn new(
        page_index: usize,
        question_index: usize,
        total_questions: usize,
        num_options: usize,
    ) -> Self {
        Self {
            page_index,
            question_index,
            total_questions,
            num_options,
        }
    }

    /// 题号（从1开始）
    pub fn number(&self) -> usize {
        self.question_index + 1
    }

    pub fn is_last(&self) -> bool {
        self.number() == self.total_questions
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[页 {} 题目#{}/{}]",
            self.page_index,
            self.number(),
            self.total_questions
        )
    }
}

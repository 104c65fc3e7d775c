//! 整份表单作答流程 - 流程层
//!
//! 核心职责：按页、按题号递增顺序完成一次作答
//!
//! 流程顺序：
//! 1. 进入新页 → `AnswerSink::begin_page`
//! 2. 逐题决策 → `SelectionSession::select_answer` → `AnswerSink::record`
//! 3. 本页完成 → `AnswerSink::finish_page`（翻页 / 提交）
//! 4. 汇总统计

use anyhow::{Context, Result};

use crate::config::Config;
use crate::infrastructure::RandomSource;
use crate::models::{TargetAccuracy, TargetWindow};
use crate::services::{AnswerSink, Decision, SelectionSession};
use crate::utils::logging;
use crate::workflow::question_ctx::{PageCtx, QuestionCtx};

/// 作答结果统计
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// 题目总数
    pub total: usize,
    /// 答对数
    pub correct: usize,
    pub window: TargetWindow,
    pub accuracy: TargetAccuracy,
    pub forced_correct: usize,
    pub forced_incorrect: usize,
    /// 页数
    pub pages: usize,
}

impl RunReport {
    /// 最终得分是否落在目标区间内
    pub fn in_window(&self) -> bool {
        self.window.contains(self.correct)
    }

    /// 得分百分比
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}

/// 作答流程
///
/// - 决定何时翻页、何时输出进度
/// - 不持有随机数来源和会话，由编排层传入
pub struct FormRun {
    num_options: usize,
    questions_per_page: usize,
    progress_interval: usize,
}

impl FormRun {
    /// 根据配置创建作答流程
    pub fn new(config: &Config) -> Self {
        Self::with_layout(
            config.num_options,
            config.questions_per_page,
            config.progress_interval,
        )
    }

    /// 指定选项数、每页题目数和进度间隔
    pub fn with_layout(
        num_options: usize,
        questions_per_page: usize,
        progress_interval: usize,
    ) -> Self {
        Self {
            num_options,
            questions_per_page: questions_per_page.max(1),
            progress_interval,
        }
    }

    /// 完成整份表单的作答
    pub fn run(
        &self,
        session: &mut SelectionSession,
        sink: &mut dyn AnswerSink,
        rng: &mut dyn RandomSource,
    ) -> Result<RunReport> {
        let total = session.total();
        let total_pages = total.div_ceil(self.questions_per_page);

        let mut forced_correct = 0;
        let mut forced_incorrect = 0;

        for page_index in 1..=total_pages {
            let page = PageCtx::new(page_index, self.questions_per_page, total);
            logging::log_page_start(&page);
            sink.begin_page(&page)
                .with_context(|| format!("{} 进入页面失败", page))?;

            for question_index in page.questions() {
                let ctx = QuestionCtx::new(page_index, question_index, total, self.num_options);

                let selection = session
                    .select_answer(question_index, self.num_options, rng)
                    .with_context(|| format!("{} 选项决策失败", ctx))?;

                match selection.decision {
                    Decision::ForcedCorrect => forced_correct += 1,
                    Decision::ForcedIncorrect => forced_incorrect += 1,
                    _ => {}
                }

                logging::log_question(&ctx, &selection);
                if self.should_log_progress(&ctx) {
                    logging::log_progress(&ctx, &selection);
                }

                sink.record(&ctx, &selection)
                    .with_context(|| format!("{} 作答失败", ctx))?;
            }

            sink.finish_page(&page)
                .with_context(|| format!("{} 翻页失败", page))?;
        }

        Ok(RunReport {
            total,
            correct: session.correct_answers(),
            window: session.window(),
            accuracy: session.accuracy(),
            forced_correct,
            forced_incorrect,
            pages: total_pages,
        })
    }

    fn should_log_progress(&self, ctx: &QuestionCtx) -> bool {
        let periodic =
            self.progress_interval > 0 && ctx.question_index % self.progress_interval == 0;
        periodic || ctx.is_last()
    }
}

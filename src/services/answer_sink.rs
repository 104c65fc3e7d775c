//! 作答输出接口 - 业务能力层
//!
//! 流程层把每一题的决策结果交给 `AnswerSink`，由具体实现决定如何落地
//! （写记录文件、驱动页面点击等）。

use anyhow::Result;

use crate::models::Respondent;
use crate::services::selector::Selection;
use crate::workflow::question_ctx::{PageCtx, QuestionCtx};

/// 作答输出
pub trait AnswerSink {
    /// 填写第一页的作答者信息，在第 1 页之前调用一次
    fn begin_form(&mut self, _respondent: &Respondent) -> Result<()> {
        Ok(())
    }

    /// 进入新的一页
    fn begin_page(&mut self, _page: &PageCtx) -> Result<()> {
        Ok(())
    }

    /// 落地单道题的选择
    fn record(&mut self, ctx: &QuestionCtx, selection: &Selection) -> Result<()>;

    /// 当前页作答完毕（翻页或提交前）
    fn finish_page(&mut self, _page: &PageCtx) -> Result<()> {
        Ok(())
    }
}

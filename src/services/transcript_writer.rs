//! 作答记录写入服务 - 业务能力层
//!
//! 只负责"把每题的选择写进记录文件"，不关心决策过程

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use tracing::debug;

use crate::models::{option_letter, Respondent};
use crate::services::answer_sink::AnswerSink;
use crate::services::selector::Selection;
use crate::workflow::question_ctx::{PageCtx, QuestionCtx};

/// 作答记录写入服务
///
/// 职责：
/// - 每题追加一行记录
/// - 每页结束时写入分隔行并刷新
pub struct TranscriptWriter {
    path: String,
    writer: BufWriter<File>,
}

impl TranscriptWriter {
    /// 打开（或创建）记录文件，以追加方式写入
    pub fn open(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("无法打开作答记录文件: {}", path))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }
}

impl AnswerSink for TranscriptWriter {
    fn begin_form(&mut self, respondent: &Respondent) -> Result<()> {
        writeln!(
            self.writer,
            "作答者: {} | 年龄: {}",
            respondent.name, respondent.age
        )?;
        Ok(())
    }

    fn begin_page(&mut self, page: &PageCtx) -> Result<()> {
        writeln!(self.writer, "{}", page)?;
        Ok(())
    }

    fn record(&mut self, ctx: &QuestionCtx, selection: &Selection) -> Result<()> {
        debug!("写入作答记录: {} -> {}", ctx, selection.selected_option);

        writeln!(
            self.writer,
            "第 {} 题 | 答案 {} | 作答 {} | {}",
            ctx.number(),
            option_letter(selection.correct_option),
            option_letter(selection.selected_option),
            selection.decision.label()
        )?;
        Ok(())
    }

    fn finish_page(&mut self, page: &PageCtx) -> Result<()> {
        writeln!(self.writer, "{} 完成\n", page)?;
        self.writer
            .flush()
            .with_context(|| format!("无法写入作答记录文件: {}", self.path))?;
        Ok(())
    }
}

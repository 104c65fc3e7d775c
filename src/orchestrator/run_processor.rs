//! 单次作答处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整作答的资源准备和收尾。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、创建随机数来源
//! 2. **答案表准备**：加载 / 随机生成 / 补齐答案表
//! 3. **会话创建**：抽取目标正确率和作答者信息，构造 `SelectionSession`
//! 4. **流程委托**：交给 `FormRun` 逐页作答，结果写入作答记录
//! 5. **收尾**：输出统计、保存答案表

use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::RngSource;
use crate::models::{
    load_answer_key, save_answer_key, AnswerKey, Respondent, TargetAccuracy, TargetWindow,
};
use crate::services::AnswerSink;
use crate::services::{SelectionSession, TranscriptWriter};
use crate::utils::logging;
use crate::workflow::{FormRun, RunReport};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    rng: RngSource<StdRng>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)
            .with_context(|| format!("无法初始化日志文件: {}", config.output_log_file))?;

        logging::log_startup(&config);

        let rng = match config.seed {
            Some(seed) => {
                info!("🎲 使用固定随机种子: {}", seed);
                RngSource::seeded(seed)
            }
            None => RngSource::from_entropy(),
        };

        Ok(Self { config, rng })
    }

    /// 运行一次完整作答
    pub async fn run(&mut self) -> Result<RunReport> {
        let key = self.prepare_answer_key().await?;

        let window = TargetWindow::new(
            self.config.min_score,
            self.config.max_score,
            self.config.total_questions,
        )?;
        let accuracy = TargetAccuracy::sample(
            self.config.accuracy_min,
            self.config.accuracy_max,
            &mut self.rng,
        )?;
        info!("🎯 目标正确率设为 {}，目标分数区间 {}", accuracy, window);

        let mut session = SelectionSession::new(key, window, accuracy)?;
        let mut transcript = TranscriptWriter::open(self.config.transcript_file.clone())?;

        let respondent = Respondent::random(&mut self.rng);
        info!("👤 作答者: {}", respondent);
        transcript
            .begin_form(&respondent)
            .context("填写作答者信息失败")?;

        let report =
            FormRun::new(&self.config).run(&mut session, &mut transcript, &mut self.rng)?;

        logging::print_final_stats(&report, &self.config.output_log_file);
        logging::append_run_summary(&self.config.output_log_file, &report)?;
        if !report.in_window() {
            warn!("⚠️ 最终得分 {} 不在目标区间 {} 内", report.correct, report.window);
        }

        if let Some(path) = &self.config.save_answer_key_path {
            save_answer_key(Path::new(path), session.key()).await?;
        }

        Ok(report)
    }

    /// 加载答案表；未配置时随机生成，不足时按配置补齐
    async fn prepare_answer_key(&mut self) -> Result<AnswerKey> {
        let total = self.config.total_questions;
        let num_options = self.config.num_options;

        info!("\n📁 正在准备答案表...");
        let key = match &self.config.answer_key_path {
            Some(path) => load_answer_key(Path::new(path), num_options).await?,
            None => {
                warn!("⚠️ 未提供答案表，随机生成 {} 道题的答案", total);
                return Ok(AnswerKey::random(total, num_options, &mut self.rng));
            }
        };

        if key.len() < total && self.config.pad_short_key {
            warn!(
                "⚠️ 答案表只有 {} 个答案，用随机答案补齐到 {} 个",
                key.len(),
                total
            );
            return Ok(key.padded(total, num_options, &mut self.rng));
        }

        key.expect_len(total).map_err(AppError::from)?;
        Ok(key)
    }
}

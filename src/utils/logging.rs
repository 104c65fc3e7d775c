//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::option_letter;
use crate::services::selector::Selection;
use crate::workflow::form_run::RunReport;
use crate::workflow::question_ctx::{PageCtx, QuestionCtx};

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info 级别
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n作答日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 分数区间作答模式");
    info!("📊 题目总数: {} | 每题 {} 个选项", config.total_questions, config.num_options);
    info!("🎯 目标分数区间: {}-{}", config.min_score, config.max_score);
    info!("{}", "=".repeat(60));
}

/// 记录页面开始
pub fn log_page_start(page: &PageCtx) {
    info!("\n{}", "─".repeat(60));
    info!(
        "📄 {} 题目 {}-{}",
        page,
        page.first_question + 1,
        page.first_question + page.question_count
    );
}

/// 记录单题决策（debug 级别）
pub fn log_question(ctx: &QuestionCtx, selection: &Selection) {
    let status = if selection.is_correct() { "答对" } else { "答错" };
    debug!(
        "Q{}: 答案 {}, 作答 {} ({}, {})",
        ctx.number(),
        option_letter(selection.correct_option),
        option_letter(selection.selected_option),
        status,
        selection.decision.label()
    );
}

/// 记录阶段进度：当前得分、预计最终得分以及剩余题目的正确率上下界
pub fn log_progress(ctx: &QuestionCtx, selection: &Selection) {
    let answered = ctx.number();
    let projected = selection.correct_so_far * ctx.total_questions / answered;
    info!(
        "📈 当前得分: {}/{} (预计: {} / {})",
        selection.correct_so_far, answered, projected, ctx.total_questions
    );
    info!(
        "📐 剩余题目正确率范围: {:.2} - {:.2}",
        selection.bounds.min_needed, selection.bounds.max_allowed
    );
}

/// 打印最终统计信息
pub fn print_final_stats(report: &RunReport, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 作答完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!(
        "✅ 最终得分: {}/{} ({:.1}%)",
        report.correct,
        report.total,
        report.percentage()
    );
    info!(
        "🎯 是否落在目标区间 {}: {}",
        report.window,
        report.in_window()
    );
    info!(
        "🔒 强制答对 {} 题，强制答错 {} 题",
        report.forced_correct, report.forced_incorrect
    );
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 将最终统计追加到日志文件
pub fn append_run_summary(log_file_path: &str, report: &RunReport) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    writeln!(
        file,
        "目标正确率: {}\n最终得分: {}/{} ({:.1}%)\n目标区间: {} | 落在区间内: {}\n强制答对: {} | 强制答错: {} | 页数: {}",
        report.accuracy,
        report.correct,
        report.total,
        report.percentage(),
        report.window,
        report.in_window(),
        report.forced_correct,
        report.forced_incorrect,
        report.pages
    )?;
    Ok(())
}

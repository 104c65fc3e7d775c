//! # Score Window
//!
//! 按标准答案表为长篇分页单选表单逐题决定作答选项，
//! 使最终答对数落在给定的分数区间内，同时作答序列保持随机性。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有随机数生成器，只暴露抽样能力
//! - `RandomSource` - 可注入的随机数来源（`RngSource` / `ScriptedSource`）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单道题
//! - `SelectionSession` - 分数区间选项决策
//! - `AnswerSink` / `TranscriptWriter` - 作答结果落地
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份表单"的作答流程
//! - `QuestionCtx` / `PageCtx` - 上下文封装（页码 + 题号）
//! - `FormRun` - 流程编排（逐页 → 逐题决策 → 落地 → 翻页）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/run_processor` - 准备答案表与会话，输出统计
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{RandomSource, RngSource, ScriptedSource};
pub use models::{AnswerKey, Respondent, TargetAccuracy, TargetWindow};
pub use orchestrator::App;
pub use services::{AnswerSink, Decision, Selection, SelectionSession};
pub use workflow::{FormRun, PageCtx, QuestionCtx, RunReport};

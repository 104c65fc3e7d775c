//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次作答的资源准备和收尾，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! run_processor (App：配置 / 答案表 / 随机数来源 / 统计)
//!     ↓
//! workflow::FormRun (逐页逐题作答)
//!     ↓
//! services (能力层：selector / transcript)
//!     ↓
//! infrastructure (基础设施：RandomSource)
//! ```
//!
//! ## 设计原则
//!
//! 1. **资源隔离**：只有编排层持有随机数来源和决策会话
//! 2. **向下依赖**：编排层 → workflow → services → infrastructure
//! 3. **无业务逻辑**：只做调度和统计，不做具体选项判断

pub mod run_processor;

// 重新导出主要类型
pub use run_processor::App;

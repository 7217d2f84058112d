//! # Auto Judge
//!
//! 自动评测问卷中代码题的 Rust 应用程序：
//! 从表格中提取 ``` 代码块，提交到 Judge0 评测，再把结果写回表格。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 只暴露 HTTP 能力
//! - `JudgeClient` - 语言 / 状态目录、创建评测、查询评测
//! - `SheetsClient` - 读取问卷区域、批量写入报告（服务账号认证）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 只处理单道代码题
//! - `code_block` - 提取代码块
//! - `resolver` - 语言 / 状态解析
//! - `submission` - 提交并轮询评测结果
//! - `report` - 组装报告行
//! - `FailureWriter` - 写失败记录
//!
//! ### ③ 流程层（Workflow）
//! - `RecordCtx` - 上下文封装（序号 + 表格行号）
//! - `RecordFlow` - 单条记录的流程（提取 → 提交 → 报告）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 目录加载、逐条评测、报告写回
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{JudgeApi, JudgeClient, SheetsClient, SpreadsheetApi};
pub use config::Config;
pub use error::{ApiError, AppError, AppResult};
pub use models::{CodeBlock, Record, ReportRow};
pub use orchestrator::{App, RunSummary};
pub use workflow::{RecordCtx, RecordFlow};

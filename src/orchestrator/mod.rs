//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责整张问卷表的调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Record>)
//!     ↓
//! workflow::RecordFlow (处理单条 Record)
//!     ↓
//! services (能力层：extract / resolve / submit / report)
//!     ↓
//! clients (基础设施：JudgeApi / SpreadsheetApi)
//! ```
//!
//! 只做调度和统计，不做具体业务判断。

pub mod batch_processor;

pub use batch_processor::{App, RunSummary};

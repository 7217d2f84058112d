//! 记录处理上下文
//!
//! 封装"我正在处理第几条记录"这一信息

use std::fmt::Display;

/// 单条记录所处的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStage {
    /// 已提取代码块
    Extracted,
    /// 已提交评测并拿到结果
    Submitted,
    /// 已生成报告行
    Reported,
}

impl Display for RecordStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordStage::Extracted => "已提取",
            RecordStage::Submitted => "已评测",
            RecordStage::Reported => "已生成报告",
        };
        f.write_str(name)
    }
}

/// 记录处理上下文
#[derive(Debug, Clone)]
pub struct RecordCtx {
    /// 记录索引（从0开始）
    pub index: usize,
    /// 记录总数
    pub total: usize,
    /// 表格行号
    pub sheet_row: usize,
    pub name: String,
}

impl RecordCtx {
    pub fn new(index: usize, total: usize, sheet_row: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            total,
            sheet_row,
            name: name.into(),
        }
    }

    /// 报告中的序号
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

impl Display for RecordCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[记录 {}/{} 行#{} {}]",
            self.ordinal(),
            self.total,
            self.sheet_row,
            self.name
        )
    }
}

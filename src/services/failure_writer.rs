//! 失败记录写入服务 - 业务能力层
//!
//! 只负责"写 failed.txt"能力，不关心流程

use crate::error::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::debug;

/// 失败记录写入服务
///
/// 每条无法评测的代码题写一行，方便人工复查
pub struct FailureWriter {
    path: String,
}

impl FailureWriter {
    /// 使用指定文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 写入文件头（覆盖上一次运行的内容）
    pub fn init(&self) -> AppResult<()> {
        let header = format!(
            "{}\n评测失败记录 - {}\n{}\n\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );
        fs::write(&self.path, header).map_err(|source| self.io_error(source))
    }

    /// 追加一条失败记录
    ///
    /// # 参数
    /// - `ordinal`: 报告中的序号
    /// - `sheet_row`: 表格行号
    /// - `name`: 答题者姓名
    /// - `track`: 第几道代码题
    /// - `reason`: 失败原因
    pub fn write(
        &self,
        ordinal: usize,
        sheet_row: usize,
        name: &str,
        track: usize,
        reason: &str,
    ) -> AppResult<()> {
        debug!("写入失败记录: 序号 {} | 第 {} 题 | {}", ordinal, track, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        let line = format!(
            "序号 {} | 表格第 {} 行 | {} | 第 {} 题 | {}\n",
            ordinal, sheet_row, name, track, reason
        );

        file.write_all(line.as_bytes())
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> AppError {
        AppError::File {
            path: self.path.clone(),
            source,
        }
    }
}

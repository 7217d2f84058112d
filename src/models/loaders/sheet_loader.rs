use crate::models::record::{CodeAnswer, ColumnLayout, Record};
use serde_json::Value;
use tracing::debug;

/// 将表格原始行转换为提交记录
///
/// 前 `header_rows` 行为表头，直接跳过。
/// 表格 API 会省略行尾的空单元格，缺失的列按空字符串处理。
pub fn rows_to_records(
    rows: &[Vec<Value>],
    layout: &ColumnLayout,
    header_rows: usize,
) -> Vec<Record> {
    rows.iter()
        .enumerate()
        .skip(header_rows)
        .map(|(index, row)| {
            let record = row_to_record(row, layout, index + 1);
            debug!(
                "读取第 {} 行: {} <{}> ({})",
                record.sheet_row, record.name, record.email, record.campus
            );
            record
        })
        .collect()
}

/// 转换单行
pub fn row_to_record(row: &[Value], layout: &ColumnLayout, sheet_row: usize) -> Record {
    Record {
        sheet_row,
        name: cell_text(row, layout.name),
        email: cell_text(row, layout.email),
        campus: cell_text(row, layout.campus),
        primary: CodeAnswer::new(cell_text(row, layout.primary_answer)),
        secondary: CodeAnswer::new(cell_text(row, layout.secondary_answer)),
    }
}

/// 读取单元格文本
fn cell_text(row: &[Value], column: usize) -> String {
    match row.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// 报告表头（与 [`ReportRow::to_cells`] 的列顺序一致）
pub const REPORT_HEADER: [&str; 13] = [
    "No",
    "Name",
    "Email",
    "Campus",
    "Programming Language",
    "Source Code",
    "Output",
    "Expected Output",
    "Status",
    "Programming Language 2",
    "Source Code 2",
    "Output 2",
    "Status 2",
];

/// 未找到代码块
pub const NO_CODE_BLOCK: &str = "NO CODE BLOCK";

/// 状态目录中不存在的状态
pub fn unknown_status(status_id: i64) -> String {
    format!("Unknown status ({})", status_id)
}

/// 无法识别的语言
pub fn unsupported_language(tag: &str) -> String {
    format!("UNSUPPORTED LANGUAGE: {}", tag)
}

/// 评测请求失败
pub fn error_status(message: &str) -> String {
    format!("ERROR: {}", message)
}

/// 一道代码题在报告中的列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackColumns {
    pub language: String,
    pub source_code: String,
    pub stdout: String,
    pub expected_output: String,
    pub status: String,
}

/// 报告中的一行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRow {
    /// 序号（从1开始）
    pub ordinal: usize,
    pub name: String,
    pub email: String,
    pub campus: String,
    pub primary: TrackColumns,
    /// 第二道代码题，未评测时为 None
    pub secondary: Option<TrackColumns>,
}

impl ReportRow {
    /// 按表头顺序展开为单元格
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.ordinal.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.campus.clone(),
            self.primary.language.clone(),
            self.primary.source_code.clone(),
            self.primary.stdout.clone(),
            self.primary.expected_output.clone(),
            self.primary.status.clone(),
        ];

        match &self.secondary {
            Some(track) => cells.extend([
                track.language.clone(),
                track.source_code.clone(),
                track.stdout.clone(),
                track.status.clone(),
            ]),
            None => cells.extend(std::iter::repeat(String::new()).take(4)),
        }

        cells
    }
}

/// 表头行
pub fn header_cells() -> Vec<String> {
    REPORT_HEADER.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_match_header() {
        let row = ReportRow {
            ordinal: 1,
            name: "Budi".to_string(),
            ..Default::default()
        };
        let cells = row.to_cells();
        assert_eq!(cells.len(), REPORT_HEADER.len());
        assert_eq!(cells[0], "1");
        assert_eq!(cells[1], "Budi");
        assert!(cells[9..].iter().all(String::is_empty));
    }

    #[test]
    fn test_secondary_columns() {
        let row = ReportRow {
            ordinal: 2,
            secondary: Some(TrackColumns {
                language: "go".to_string(),
                source_code: "package main".to_string(),
                stdout: "hi\n".to_string(),
                expected_output: "hi".to_string(),
                status: "Accepted".to_string(),
            }),
            ..Default::default()
        };
        let cells = row.to_cells();
        assert_eq!(&cells[9..], &["go", "package main", "hi\n", "Accepted"]);
    }
}

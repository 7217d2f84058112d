//! 报告组装 - 业务能力层
//!
//! 纯函数，不会失败；输入均已由上游解码 / 解析

use crate::models::outcome::TrackOutcome;
use crate::models::report::{error_status, unsupported_language, NO_CODE_BLOCK};
use crate::models::{CodeBlock, Record, ReportRow, SubmissionResult, TrackColumns};

/// 组装评测成功的一行
///
/// `index` 从0开始，序号为 `index + 1`
pub fn assemble(
    index: usize,
    record: &Record,
    block: &CodeBlock,
    result: &SubmissionResult,
    status_description: &str,
) -> ReportRow {
    ReportRow {
        primary: graded_columns(block, result, status_description),
        ..identity_row(index, record)
    }
}

/// 按两道题的处理结果组装一行（包括失败标记）
pub fn assemble_outcome(
    index: usize,
    record: &Record,
    primary: &TrackOutcome,
    secondary: &TrackOutcome,
) -> ReportRow {
    let mut row = match primary {
        TrackOutcome::Graded {
            block,
            result,
            status,
        } => assemble(index, record, block, result, status),
        other => ReportRow {
            primary: track_columns(other).unwrap_or_default(),
            ..identity_row(index, record)
        },
    };
    row.secondary = track_columns(secondary);
    row
}

fn identity_row(index: usize, record: &Record) -> ReportRow {
    ReportRow {
        ordinal: index + 1,
        name: record.name.clone(),
        email: record.email.clone(),
        campus: record.campus.clone(),
        primary: TrackColumns::default(),
        secondary: None,
    }
}

fn graded_columns(block: &CodeBlock, result: &SubmissionResult, status: &str) -> TrackColumns {
    TrackColumns {
        language: block.tag.clone(),
        source_code: result.source_code.clone(),
        stdout: result.stdout.clone(),
        expected_output: result.expected_output.clone(),
        status: status.to_string(),
    }
}

/// 单道题的列；未评测时为 None
fn track_columns(outcome: &TrackOutcome) -> Option<TrackColumns> {
    let columns = match outcome {
        TrackOutcome::Graded {
            block,
            result,
            status,
        } => graded_columns(block, result, status),
        TrackOutcome::NoCodeBlock { raw } => TrackColumns {
            source_code: raw.clone(),
            status: NO_CODE_BLOCK.to_string(),
            ..Default::default()
        },
        TrackOutcome::UnsupportedLanguage { block } => TrackColumns {
            language: block.tag.clone(),
            source_code: block.body.clone(),
            status: unsupported_language(&block.tag),
            ..Default::default()
        },
        TrackOutcome::Failed { block, error } => TrackColumns {
            language: block.tag.clone(),
            source_code: block.body.clone(),
            status: error_status(error),
            ..Default::default()
        },
        TrackOutcome::NotGraded => return None,
    };
    Some(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::REPORT_HEADER;
    use crate::models::CodeAnswer;

    fn record(name: &str) -> Record {
        Record {
            sheet_row: 2,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            campus: "Bandung".to_string(),
            primary: CodeAnswer::new("```python\nprint(1)\n```"),
            secondary: CodeAnswer::default(),
        }
    }

    fn python_block() -> CodeBlock {
        CodeBlock {
            tag: "python".to_string(),
            body: "print(1)".to_string(),
            fenced: true,
        }
    }

    fn accepted_result() -> SubmissionResult {
        SubmissionResult {
            source_code: "print(1)".to_string(),
            stdout: "1\n".to_string(),
            expected_output: "1".to_string(),
            status_id: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_assemble_graded_row() {
        let row = assemble(0, &record("Budi"), &python_block(), &accepted_result(), "Accepted");

        assert_eq!(
            row.to_cells()[..9],
            [
                "1",
                "Budi",
                "budi@example.com",
                "Bandung",
                "python",
                "print(1)",
                "1\n",
                "1",
                "Accepted"
            ]
        );
        assert!(row.secondary.is_none());
    }

    #[test]
    fn test_ordinals_are_contiguous() {
        let records: Vec<Record> = ["A", "B", "C", "D"].iter().map(|n| record(n)).collect();
        let rows: Vec<ReportRow> = records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                assemble_outcome(
                    i,
                    r,
                    &TrackOutcome::NoCodeBlock { raw: String::new() },
                    &TrackOutcome::NotGraded,
                )
            })
            .collect();

        assert_eq!(rows.len(), records.len());
        let ordinals: Vec<usize> = rows.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sentinel_rows() {
        let rec = record("Sari");

        let no_block = assemble_outcome(
            0,
            &rec,
            &TrackOutcome::NoCodeBlock {
                raw: "tidak tahu".to_string(),
            },
            &TrackOutcome::NotGraded,
        );
        assert_eq!(no_block.primary.status, "NO CODE BLOCK");
        assert_eq!(no_block.primary.source_code, "tidak tahu");

        let unsupported = assemble_outcome(
            1,
            &rec,
            &TrackOutcome::UnsupportedLanguage {
                block: CodeBlock {
                    tag: "cobol".to_string(),
                    body: "DISPLAY 'HI'".to_string(),
                    fenced: true,
                },
            },
            &TrackOutcome::NotGraded,
        );
        assert_eq!(unsupported.primary.status, "UNSUPPORTED LANGUAGE: cobol");
        assert_eq!(unsupported.primary.language, "cobol");

        let failed = assemble_outcome(
            2,
            &rec,
            &TrackOutcome::Failed {
                block: python_block(),
                error: "timeout".to_string(),
            },
            &TrackOutcome::NotGraded,
        );
        assert_eq!(failed.primary.status, "ERROR: timeout");
        assert_eq!(failed.to_cells().len(), REPORT_HEADER.len());
    }

    #[test]
    fn test_secondary_track_filled() {
        let secondary = TrackOutcome::Graded {
            block: CodeBlock {
                tag: "go".to_string(),
                body: "package main".to_string(),
                fenced: true,
            },
            result: SubmissionResult {
                source_code: "package main".to_string(),
                stdout: "ok".to_string(),
                status_id: 4,
                ..Default::default()
            },
            status: "Wrong Answer".to_string(),
        };
        let primary = TrackOutcome::Graded {
            block: python_block(),
            result: accepted_result(),
            status: "Accepted".to_string(),
        };

        let row = assemble_outcome(0, &record("Budi"), &primary, &secondary);
        let cells = row.to_cells();
        assert_eq!(cells[8], "Accepted");
        assert_eq!(&cells[9..], &["go", "package main", "ok", "Wrong Answer"]);
    }
}

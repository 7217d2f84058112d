//! 测试用的内存评测服务与表格

#![allow(dead_code)]

use async_trait::async_trait;
use auto_judge::error::{ApiError, ApiResult, AppResult};
use auto_judge::models::{Language, LanguageId, Status, SubmissionResult, SubmissionToken};
use auto_judge::{Config, JudgeApi, SpreadsheetApi};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// 已创建的评测
#[derive(Debug, Clone)]
pub struct Created {
    pub language_id: LanguageId,
    pub source_code: String,
    pub expected_output: String,
}

/// 内存评测服务
///
/// - 代码包含 `unreachable` 时查询返回 503
/// - 代码包含 `wrong` 时状态为 Wrong Answer，否则 Accepted
/// - 前 `pending_fetches` 次查询返回 Processing
pub struct FakeJudge {
    pub languages: Vec<Language>,
    pub statuses: Vec<Status>,
    pub fail_languages: bool,
    pub pending_fetches: u32,
    pub created: Arc<Mutex<Vec<Created>>>,
    pub fetches: Arc<Mutex<u32>>,
}

impl FakeJudge {
    pub fn new() -> Self {
        Self {
            languages: vec![
                Language {
                    id: 50,
                    name: "C (GCC 9.2.0)".to_string(),
                },
                Language {
                    id: 54,
                    name: "C++ (GCC 9.2.0)".to_string(),
                },
                Language {
                    id: 60,
                    name: "Go (1.13.5)".to_string(),
                },
                Language {
                    id: 71,
                    name: "Python (3.8.1)".to_string(),
                },
            ],
            statuses: vec![
                Status {
                    id: 1,
                    description: "In Queue".to_string(),
                },
                Status {
                    id: 2,
                    description: "Processing".to_string(),
                },
                Status {
                    id: 3,
                    description: "Accepted".to_string(),
                },
                Status {
                    id: 4,
                    description: "Wrong Answer".to_string(),
                },
            ],
            fail_languages: false,
            pending_fetches: 0,
            created: Arc::new(Mutex::new(Vec::new())),
            fetches: Arc::new(Mutex::new(0)),
        }
    }
}

#[async_trait]
impl JudgeApi for FakeJudge {
    async fn languages(&self) -> ApiResult<Vec<Language>> {
        if self.fail_languages {
            return Err(ApiError::BadResponse {
                endpoint: "/languages/".to_string(),
                status: 502,
                body: "bad gateway".to_string(),
            });
        }
        Ok(self.languages.clone())
    }

    async fn statuses(&self) -> ApiResult<Vec<Status>> {
        Ok(self.statuses.clone())
    }

    async fn create_submission(
        &self,
        language_id: LanguageId,
        source_code: &str,
        expected_output: &str,
    ) -> ApiResult<SubmissionToken> {
        let mut created = self.created.lock().unwrap();
        created.push(Created {
            language_id,
            source_code: source_code.to_string(),
            expected_output: expected_output.to_string(),
        });
        Ok(SubmissionToken {
            token: format!("tok-{}", created.len() - 1),
        })
    }

    async fn fetch_submission(&self, token: &SubmissionToken) -> ApiResult<SubmissionResult> {
        let fetch_no = {
            let mut fetches = self.fetches.lock().unwrap();
            *fetches += 1;
            *fetches
        };

        let index: usize = token.token.trim_start_matches("tok-").parse().unwrap();
        let submission = self.created.lock().unwrap()[index].clone();

        if submission.source_code.contains("unreachable") {
            return Err(ApiError::BadResponse {
                endpoint: format!("/submissions/{}", token),
                status: 503,
                body: "service unavailable".to_string(),
            });
        }

        if fetch_no <= self.pending_fetches {
            return Ok(SubmissionResult {
                status_id: 2,
                ..Default::default()
            });
        }

        let wrong = submission.source_code.contains("wrong");
        Ok(SubmissionResult {
            source_code: submission.source_code.clone(),
            stdout: if wrong {
                "0\n".to_string()
            } else {
                format!("{}\n", submission.expected_output)
            },
            expected_output: submission.expected_output.clone(),
            status_id: if wrong { 4 } else { 3 },
            time: Some("0.01".to_string()),
            ..Default::default()
        })
    }
}

/// 内存表格
pub struct FakeSheets {
    pub rows: Vec<Vec<Value>>,
    pub written: Arc<Mutex<Vec<(String, Vec<Vec<String>>)>>>,
}

impl FakeSheets {
    pub fn new(rows: Vec<Vec<Value>>) -> Self {
        Self {
            rows,
            written: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl SpreadsheetApi for FakeSheets {
    async fn read_rows(&self, _range: &str) -> AppResult<Vec<Vec<Value>>> {
        Ok(self.rows.clone())
    }

    async fn write_rows(&self, range: &str, rows: Vec<Vec<String>>) -> AppResult<()> {
        self.written.lock().unwrap().push((range.to_string(), rows));
        Ok(())
    }
}

/// 构造问卷回复行（默认列布局）
pub fn response_row(name: &str, primary: &str, secondary: &str) -> Vec<Value> {
    let mut row = vec![json!(""); 21];
    row[0] = json!("2024/03/01 10:00:00");
    row[1] = json!(format!("{}@example.com", name.to_lowercase()));
    row[3] = json!(name);
    row[4] = json!("Jakarta");
    row[17] = json!(primary);
    row[19] = json!(secondary);
    row
}

pub fn header_row() -> Vec<Value> {
    vec![
        json!("Timestamp"),
        json!("Email Address"),
        json!(""),
        json!("Nama"),
        json!("Kampus"),
    ]
}

/// 测试配置：失败记录写到临时目录，轮询间隔极短
pub fn test_config(dir: &tempfile::TempDir) -> Config {
    Config {
        spreadsheet_id: "test-sheet".to_string(),
        expected_output: "42".to_string(),
        failure_log_file: dir.path().join("failed.txt").to_string_lossy().to_string(),
        poll_max_attempts: 5,
        poll_interval_ms: 1,
        poll_max_interval_ms: 2,
        ..Config::default()
    }
}

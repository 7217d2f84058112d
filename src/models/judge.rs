//! 评测服务（Judge0）请求 / 响应结构

use crate::models::catalog::{LanguageId, StatusId};
use crate::utils::codec;
use serde::{Deserialize, Serialize};

/// 排队中
pub const STATUS_IN_QUEUE: StatusId = 1;
/// 运行中
pub const STATUS_PROCESSING: StatusId = 2;

/// 状态是否仍未结束（需要再次查询）
pub fn is_pending_status(status_id: StatusId) -> bool {
    status_id == STATUS_IN_QUEUE || status_id == STATUS_PROCESSING
}

/// 创建评测的请求体（代码与期望输出均为 base64）
#[derive(Debug, Clone, Serialize)]
pub struct CreateSubmissionRequest {
    pub language_id: LanguageId,
    pub source_code: String,
    /// 未配置期望输出时不发送，评测服务不做比较
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
}

impl CreateSubmissionRequest {
    /// 由原始文本构建请求，自动进行 base64 编码
    pub fn new(language_id: LanguageId, source_code: &str, expected_output: &str) -> Self {
        Self {
            language_id,
            source_code: codec::encode(source_code),
            expected_output: (!expected_output.is_empty()).then(|| codec::encode(expected_output)),
        }
    }
}

/// 评测令牌，由服务端分配
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionToken {
    pub token: String,
}

impl std::fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusRef {
    pub id: StatusId,
    #[serde(default)]
    pub description: Option<String>,
}

/// 查询评测的原始响应（文本字段为 base64）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub source_code: Option<String>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
    #[serde(default)]
    pub expected_output: Option<String>,
    #[serde(default)]
    pub status_id: Option<StatusId>,
    /// `fields=*` 时部分版本只返回 status 对象
    #[serde(default)]
    pub status: Option<StatusRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// 解码后的评测结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionResult {
    pub source_code: String,
    pub stdout: String,
    pub expected_output: String,
    pub stderr: String,
    pub compile_output: String,
    pub status_id: StatusId,
    pub created_at: Option<String>,
    pub finished_at: Option<String>,
    /// 运行耗时（秒，文本）
    pub time: Option<String>,
}

impl SubmissionResult {
    /// 解码原始响应
    ///
    /// 返回的错误信息说明是哪个字段出了问题
    pub fn from_response(response: SubmissionResponse) -> Result<Self, String> {
        let status_id = response
            .status_id
            .or(response.status.as_ref().map(|s| s.id))
            .ok_or_else(|| "响应中缺少 status_id".to_string())?;

        let decode = |field: &str, value: Option<&str>| {
            codec::decode_text(value)
                .map_err(|e| format!("字段 {} 不是合法的 base64: {}", field, e))
        };

        Ok(Self {
            source_code: decode("source_code", response.source_code.as_deref())?,
            stdout: decode("stdout", response.stdout.as_deref())?,
            expected_output: decode("expected_output", response.expected_output.as_deref())?,
            stderr: decode("stderr", response.stderr.as_deref())?,
            compile_output: decode("compile_output", response.compile_output.as_deref())?,
            status_id,
            created_at: response.created_at,
            finished_at: response.finished_at,
            time: response.time,
        })
    }

    /// 评测是否仍在进行
    pub fn is_pending(&self) -> bool {
        is_pending_status(self.status_id)
    }
}

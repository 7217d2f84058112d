//! HTTP 响应处理的公共函数

use crate::error::{ApiError, ApiResult};
use crate::utils::logging::truncate_text;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// 构建带超时的 HTTP 客户端
pub fn build_client(timeout_secs: u64) -> ApiResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ApiError::request_failed("client", e))
}

/// 读取响应体并解析为指定类型
///
/// 非 2xx 状态码返回 `BadResponse`，JSON 结构不符返回 `InvalidPayload`
pub async fn read_json<T: DeserializeOwned>(
    endpoint: &str,
    response: reqwest::Response,
) -> ApiResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::request_failed(endpoint, e))?;

    debug!("{} 响应 {}: {}", endpoint, status, truncate_text(&body, 200));

    if !status.is_success() {
        return Err(ApiError::BadResponse {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body: truncate_text(&body, 500),
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::invalid_payload(endpoint, e))
}

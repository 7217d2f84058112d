/// 评测服务（Judge0）API 客户端
///
/// 封装所有与评测服务相关的调用逻辑
use crate::clients::http::{build_client, read_json};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    CreateSubmissionRequest, Language, LanguageId, Status, SubmissionResponse, SubmissionResult,
    SubmissionToken,
};
use async_trait::async_trait;
use tracing::debug;

/// 提交与查询都带上这两个参数
const SUBMISSION_QUERY: &[(&str, &str)] = &[("base64_encoded", "true"), ("fields", "*")];

/// 评测服务能力
///
/// 每个方法只发送一次请求，不做重试
#[async_trait]
pub trait JudgeApi: Send + Sync {
    /// 获取语言目录
    async fn languages(&self) -> ApiResult<Vec<Language>>;

    /// 获取状态目录
    async fn statuses(&self) -> ApiResult<Vec<Status>>;

    /// 创建评测，返回令牌
    async fn create_submission(
        &self,
        language_id: LanguageId,
        source_code: &str,
        expected_output: &str,
    ) -> ApiResult<SubmissionToken>;

    /// 按令牌查询评测结果（已解码）
    async fn fetch_submission(&self, token: &SubmissionToken) -> ApiResult<SubmissionResult>;
}

/// 评测服务客户端
pub struct JudgeClient {
    http: reqwest::Client,
    api_base_url: String,
    catalog_base_url: String,
    rapid_api_key: String,
    rapid_api_host: String,
}

impl JudgeClient {
    /// 创建新的评测服务客户端
    pub fn new(config: &Config) -> ApiResult<Self> {
        Ok(Self {
            http: build_client(config.request_timeout_secs)?,
            api_base_url: config.judge_api_base_url.trim_end_matches('/').to_string(),
            catalog_base_url: config.judge_catalog_base_url.trim_end_matches('/').to_string(),
            rapid_api_key: config.rapid_api_key.clone(),
            rapid_api_host: config.rapid_api_host.clone(),
        })
    }

    /// 添加 RapidAPI 认证头（未配置密钥时不添加）
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.rapid_api_key.is_empty() {
            return request;
        }
        request
            .header("X-RapidAPI-Key", &self.rapid_api_key)
            .header("X-RapidAPI-Host", &self.rapid_api_host)
    }

    async fn get_catalog<T: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let url = format!("{}{}", self.catalog_base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(path, e))?;
        read_json(path, response).await
    }
}

#[async_trait]
impl JudgeApi for JudgeClient {
    async fn languages(&self) -> ApiResult<Vec<Language>> {
        self.get_catalog("/languages/").await
    }

    async fn statuses(&self) -> ApiResult<Vec<Status>> {
        self.get_catalog("/statuses").await
    }

    async fn create_submission(
        &self,
        language_id: LanguageId,
        source_code: &str,
        expected_output: &str,
    ) -> ApiResult<SubmissionToken> {
        let endpoint = "/submissions";
        let url = format!("{}{}", self.api_base_url, endpoint);
        let payload = CreateSubmissionRequest::new(language_id, source_code, expected_output);

        debug!("创建评测: language_id={}, 代码长度 {} 字节", language_id, source_code.len());

        let response = self
            .authorize(self.http.post(&url))
            .query(SUBMISSION_QUERY)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(endpoint, e))?;

        let token: SubmissionToken = read_json(endpoint, response).await?;
        if token.token.trim().is_empty() {
            return Err(ApiError::invalid_payload(endpoint, "响应中的 token 为空"));
        }
        Ok(token)
    }

    async fn fetch_submission(&self, token: &SubmissionToken) -> ApiResult<SubmissionResult> {
        let endpoint = format!("/submissions/{}", token);
        let url = format!("{}{}", self.api_base_url, endpoint);

        let response = self
            .authorize(self.http.get(&url))
            .query(SUBMISSION_QUERY)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(endpoint.as_str(), e))?;

        let raw: SubmissionResponse = read_json(&endpoint, response).await?;
        SubmissionResult::from_response(raw)
            .map_err(|message| ApiError::invalid_payload(endpoint, message))
    }
}

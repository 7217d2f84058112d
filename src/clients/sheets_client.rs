/// Google 表格 API 客户端
///
/// 只提供按区域读取、批量写入两种能力
use crate::clients::auth::ServiceAccountAuth;
use crate::clients::http::{build_client, read_json};
use crate::config::Config;
use crate::error::{ApiError, AppResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

const SHEETS_API_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// 表格读写能力
#[async_trait]
pub trait SpreadsheetApi: Send + Sync {
    /// 读取区域内的所有行（单元格为原始 JSON 值）
    async fn read_rows(&self, range: &str) -> AppResult<Vec<Vec<Value>>>;

    /// 批量写入，单元格按用户输入解析（USER_ENTERED）
    async fn write_rows(&self, range: &str, rows: Vec<Vec<String>>) -> AppResult<()>;
}

#[derive(Debug, Default, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateResponse {
    #[serde(default)]
    total_updated_rows: Option<u64>,
    #[serde(default)]
    total_updated_cells: Option<u64>,
}

/// 表格客户端
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    auth: ServiceAccountAuth,
}

impl SheetsClient {
    /// 创建新的表格客户端
    pub fn new(config: &Config, auth: ServiceAccountAuth) -> AppResult<Self> {
        Ok(Self {
            http: build_client(config.request_timeout_secs)?,
            base_url: SHEETS_API_BASE_URL.to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            auth,
        })
    }

    /// `.../spreadsheets/{id}/values/{range}`，区域名需要百分号编码
    fn values_url(&self, range: &str) -> Result<reqwest::Url, ApiError> {
        let base = format!("{}/spreadsheets/{}/values", self.base_url, self.spreadsheet_id);
        let mut url = reqwest::Url::parse(&base).map_err(|e| ApiError::invalid_payload(&base, e))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::invalid_payload(&base, "URL 不能追加路径"))?
            .push(range);
        Ok(url)
    }
}

#[async_trait]
impl SpreadsheetApi for SheetsClient {
    async fn read_rows(&self, range: &str) -> AppResult<Vec<Vec<Value>>> {
        let url = self.values_url(range)?;
        let token = self.auth.access_token(&self.http).await?;

        debug!("读取表格区域: {}", range);

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(range, e))?;

        let value_range: ValueRange = read_json(range, response).await?;
        Ok(value_range.values)
    }

    async fn write_rows(&self, range: &str, rows: Vec<Vec<String>>) -> AppResult<()> {
        let endpoint = format!(
            "{}/spreadsheets/{}/values:batchUpdate",
            self.base_url, self.spreadsheet_id
        );
        let token = self.auth.access_token(&self.http).await?;
        let row_count = rows.len();

        let body = json!({
            "valueInputOption": "USER_ENTERED",
            "data": [{
                "range": range,
                "majorDimension": "ROWS",
                "values": rows,
            }]
        });

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(range, e))?;

        let result: BatchUpdateResponse = read_json(range, response).await?;
        info!(
            "✓ 已写入 {} 行到 {} (更新行数: {:?}, 单元格: {:?})",
            row_count, range, result.total_updated_rows, result.total_updated_cells
        );
        Ok(())
    }
}

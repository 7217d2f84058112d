use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP API 调用错误（评测服务 / 表格服务）
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 服务账号认证错误
    #[error("认证错误: {0}")]
    Auth(#[from] AuthError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 目录（语言 / 状态）获取失败，整次运行无法继续
    #[error("无法获取{catalog}目录: {source}")]
    CatalogUnavailable {
        catalog: &'static str,
        #[source]
        source: ApiError,
    },
    /// 文件操作错误
    #[error("文件错误 ({path}): {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// API 调用错误
///
/// `RequestFailed` 对应传输层失败（网络、超时），
/// 其余两种对应协议层失败（响应与预期结构不符）。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回非成功状态码
    #[error("API返回错误响应 ({endpoint}): status={status}, body={body}")]
    BadResponse {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 响应内容无法解析为预期结构
    #[error("API响应解析失败 ({endpoint}): {message}")]
    InvalidPayload { endpoint: String, message: String },
}

impl ApiError {
    /// 是否为传输层错误
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::RequestFailed { .. })
    }

    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn invalid_payload(endpoint: impl Into<String>, message: impl ToString) -> Self {
        ApiError::InvalidPayload {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }
}

/// 服务账号认证错误
#[derive(Debug, Error)]
pub enum AuthError {
    /// 读取凭证文件失败
    #[error("读取凭证文件失败 ({path}): {source}")]
    CredentialsRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 凭证文件格式错误
    #[error("凭证文件格式错误 ({path}): {source}")]
    CredentialsParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// JWT 签名失败
    #[error("JWT签名失败: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),
    /// 令牌交换失败
    #[error("令牌交换失败: {0}")]
    TokenExchange(#[source] ApiError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 必需的配置项缺失
    #[error("环境变量 {var_name} 不存在")]
    EnvVarNotFound { var_name: String },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

/// API 调用结果类型
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_errors_are_not_transport() {
        let err = ApiError::invalid_payload("/submissions", "missing token");
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "API响应解析失败 (/submissions): missing token"
        );

        let bad = ApiError::BadResponse {
            endpoint: "/statuses".to_string(),
            status: 503,
            body: "unavailable".to_string(),
        };
        assert!(!bad.is_transport());
    }

    #[test]
    fn test_catalog_error_message() {
        let err = AppError::CatalogUnavailable {
            catalog: "语言",
            source: ApiError::invalid_payload("/languages/", "expected array"),
        };
        assert!(err.to_string().starts_with("无法获取语言目录"));
    }
}

use crate::error::ConfigError;
use crate::models::ColumnLayout;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 默认配置文件路径（可通过 `AUTOJUDGE_CONFIG` 覆盖）
pub const DEFAULT_CONFIG_FILE: &str = "config/autojudge.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- 评测服务配置 ---
    /// 提交 / 查询评测的 API 地址
    pub judge_api_base_url: String,
    /// 语言 / 状态目录的 API 地址
    pub judge_catalog_base_url: String,
    /// RapidAPI 密钥，为空时不发送认证头
    pub rapid_api_key: String,
    pub rapid_api_host: String,
    /// 单次 HTTP 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 查询评测结果的最大次数（1 表示创建后只查询一次）
    pub poll_max_attempts: u32,
    /// 首次重试前的等待时间（毫秒），之后每次翻倍
    pub poll_interval_ms: u64,
    /// 重试等待的上限（毫秒）
    pub poll_max_interval_ms: u64,
    /// 主代码题的期望输出
    pub expected_output: String,
    /// 第二道代码题的期望输出
    pub expected_output_secondary: String,
    /// 是否评测第二道代码题
    pub grade_secondary: bool,

    // --- 表格配置 ---
    pub spreadsheet_id: String,
    /// 服务账号凭证文件
    pub credentials_path: String,
    /// 问卷回复所在区域
    pub source_range: String,
    /// 报告写入区域
    pub report_range: String,
    /// 跳过的表头行数
    pub header_rows: usize,
    pub columns: ColumnLayout,

    // --- 运行配置 ---
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 评测失败记录的输出文件
    pub failure_log_file: String,
    /// 只打印报告，不写回表格
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            judge_api_base_url: "https://judge0-ce.p.rapidapi.com".to_string(),
            judge_catalog_base_url: "https://ce.judge0.com".to_string(),
            rapid_api_key: String::new(),
            rapid_api_host: "judge0-ce.p.rapidapi.com".to_string(),
            request_timeout_secs: 30,
            poll_max_attempts: 10,
            poll_interval_ms: 500,
            poll_max_interval_ms: 4000,
            expected_output: String::new(),
            expected_output_secondary: String::new(),
            grade_secondary: false,
            spreadsheet_id: String::new(),
            credentials_path: "config/sheet.json".to_string(),
            source_range: "Responses-Dev!A:U".to_string(),
            report_range: "Report!A1".to_string(),
            header_rows: 1,
            columns: ColumnLayout::default(),
            verbose_logging: false,
            failure_log_file: "failed.txt".to_string(),
            dry_run: false,
        }
    }
}

impl Config {
    /// 加载配置：默认值 → TOML 文件（若存在）→ 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("AUTOJUDGE_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let base = if Path::new(&path).exists() {
            Self::from_toml_file(&path)?
        } else {
            Self::default()
        };
        base.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件读取配置，缺失字段使用默认值
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 用环境变量覆盖配置项
    ///
    /// `lookup` 返回变量值，测试中可以传入固定表而不必修改进程环境。
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str, target: &mut String| {
            if let Some(value) = lookup(name) {
                *target = value;
            }
        };
        text("JUDGE_API_BASE_URL", &mut self.judge_api_base_url);
        text("JUDGE_CATALOG_BASE_URL", &mut self.judge_catalog_base_url);
        text("X_RAPID_API_KEY", &mut self.rapid_api_key);
        text("RAPID_API_HOST", &mut self.rapid_api_host);
        text("EXPECTED_OUTPUT", &mut self.expected_output);
        text("EXPECTED_OUTPUT_SECONDARY", &mut self.expected_output_secondary);
        text("SPREAD_SHEET_ID", &mut self.spreadsheet_id);
        text("SHEET_CREDENTIALS_PATH", &mut self.credentials_path);
        text("SOURCE_RANGE", &mut self.source_range);
        text("REPORT_RANGE", &mut self.report_range);
        text("FAILURE_LOG_FILE", &mut self.failure_log_file);

        parse_var(&lookup, "REQUEST_TIMEOUT_SECS", &mut self.request_timeout_secs)?;
        parse_var(&lookup, "POLL_MAX_ATTEMPTS", &mut self.poll_max_attempts)?;
        parse_var(&lookup, "POLL_INTERVAL_MS", &mut self.poll_interval_ms)?;
        parse_var(&lookup, "POLL_MAX_INTERVAL_MS", &mut self.poll_max_interval_ms)?;
        parse_var(&lookup, "HEADER_ROWS", &mut self.header_rows)?;
        parse_var(&lookup, "GRADE_SECONDARY", &mut self.grade_secondary)?;
        parse_var(&lookup, "VERBOSE_LOGGING", &mut self.verbose_logging)?;
        parse_var(&lookup, "DRY_RUN", &mut self.dry_run)?;

        Ok(self)
    }

    /// 检查运行所必需的配置项
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(ConfigError::EnvVarNotFound {
                var_name: "SPREAD_SHEET_ID".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, target: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(value) = lookup(name) {
        *target = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: name.to_string(),
                value: value.clone(),
                expected_type: std::any::type_name::<T>().to_string(),
            })?;
    }
    Ok(())
}

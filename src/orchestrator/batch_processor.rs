//! 批量评测处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责整张问卷表的评测和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、创建评测 / 表格客户端
//! 2. **目录加载**：获取语言与状态目录，失败则整次运行终止
//! 3. **记录加载**：读取问卷区域并转换为 `Vec<Record>`
//! 4. **逐条评测**：按输入顺序依次委托 `RecordFlow`，互不影响
//! 5. **报告写回**：表头 + 每条记录一行，批量写入报告区域
//! 6. **全局统计**：汇总成功 / 失败数量

use crate::clients::{JudgeApi, JudgeClient, ServiceAccountAuth, SheetsClient, SpreadsheetApi};
use crate::config::Config;
use crate::error::AppError;
use crate::models::report::header_cells;
use crate::models::{rows_to_records, Catalogs, Record, ReportRow};
use crate::services::FailureWriter;
use crate::utils::logging::{
    log_catalogs_loaded, log_records_loaded, log_startup, print_final_stats, truncate_text,
};
use crate::workflow::{RecordCtx, RecordFlow, RecordOutcome};
use anyhow::Result;
use tracing::{info, warn};

/// 一次运行的统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub graded: usize,
    pub failed: usize,
    /// 按输入顺序的报告行
    pub rows: Vec<ReportRow>,
}

/// 应用主结构
pub struct App<J: JudgeApi, S: SpreadsheetApi> {
    config: Config,
    judge: J,
    sheets: S,
    failure_writer: FailureWriter,
}

impl App<JudgeClient, SheetsClient> {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate().map_err(AppError::from)?;

        log_startup(&config.source_range, config.poll_max_attempts.max(1));

        let judge = JudgeClient::new(&config).map_err(AppError::from)?;
        let auth = ServiceAccountAuth::from_file(&config.credentials_path).map_err(AppError::from)?;
        let sheets = SheetsClient::new(&config, auth)?;

        Ok(Self::with_clients(config, judge, sheets))
    }
}

impl<J: JudgeApi, S: SpreadsheetApi> App<J, S> {
    /// 使用指定的客户端创建应用
    pub fn with_clients(config: Config, judge: J, sheets: S) -> Self {
        let failure_writer = FailureWriter::with_path(config.failure_log_file.clone());
        Self {
            config,
            judge,
            sheets,
            failure_writer,
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        self.failure_writer.init()?;

        // 目录是所有记录的前提，获取失败直接终止
        let catalogs = self.load_catalogs().await?;

        let records = self.load_records().await?;
        if records.is_empty() {
            // 仍然写回表头，覆盖上一次的报告
            warn!("⚠️ 没有找到待评测的记录，只写入表头");
        }

        let outcomes = self.process_all_records(&catalogs, &records).await;

        let failed = outcomes.iter().filter(|o| o.has_failure()).count();
        let summary = RunSummary {
            total: outcomes.len(),
            graded: outcomes.len() - failed,
            failed,
            rows: outcomes.into_iter().map(|o| o.row).collect(),
        };

        self.write_report(&summary.rows).await?;

        print_final_stats(
            summary.graded,
            summary.failed,
            summary.total,
            self.failure_writer.path(),
        );

        Ok(summary)
    }

    /// 加载语言与状态目录
    async fn load_catalogs(&self) -> Result<Catalogs, AppError> {
        info!("\n📚 正在获取评测服务目录...");

        let languages = self
            .judge
            .languages()
            .await
            .map_err(|source| AppError::CatalogUnavailable {
                catalog: "语言",
                source,
            })?;
        let statuses = self
            .judge
            .statuses()
            .await
            .map_err(|source| AppError::CatalogUnavailable {
                catalog: "状态",
                source,
            })?;

        log_catalogs_loaded(languages.len(), statuses.len());

        Ok(Catalogs {
            languages: languages.into(),
            statuses: statuses.into(),
        })
    }

    /// 加载问卷记录
    async fn load_records(&self) -> Result<Vec<Record>, AppError> {
        info!("\n📁 正在读取问卷回复: {}", self.config.source_range);

        let rows = self.sheets.read_rows(&self.config.source_range).await?;
        let records = rows_to_records(&rows, &self.config.columns, self.config.header_rows);

        log_records_loaded(records.len(), self.config.header_rows.min(rows.len()));
        Ok(records)
    }

    /// 按输入顺序逐条评测
    async fn process_all_records(
        &self,
        catalogs: &Catalogs,
        records: &[Record],
    ) -> Vec<RecordOutcome> {
        let flow = RecordFlow::new(&self.judge, catalogs, &self.config);
        let total = records.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, record) in records.iter().enumerate() {
            let ctx = RecordCtx::new(index, total, record.sheet_row, record.name.clone());
            let outcome = flow.run(&ctx, record).await;

            for (track, reason) in outcome.failures() {
                if let Err(e) = self.failure_writer.write(
                    ctx.ordinal(),
                    ctx.sheet_row,
                    &record.name,
                    track,
                    &reason,
                ) {
                    warn!("{} ⚠️ 写入失败记录出错: {}", ctx, e);
                }
            }

            outcomes.push(outcome);
        }

        outcomes
    }

    /// 写回报告（dry run 时只打印）
    async fn write_report(&self, rows: &[ReportRow]) -> Result<(), AppError> {
        let mut values = Vec::with_capacity(rows.len() + 1);
        values.push(header_cells());
        values.extend(rows.iter().map(ReportRow::to_cells));

        if self.config.dry_run {
            info!("\n📝 Dry run，报告不写回表格:");
            for cells in &values {
                let preview: Vec<String> = cells.iter().map(|c| truncate_text(c, 40)).collect();
                info!("  {}", preview.join(" | "));
            }
            return Ok(());
        }

        info!("\n📤 正在写入报告: {}", self.config.report_range);
        self.sheets
            .write_rows(&self.config.report_range, values)
            .await
    }
}

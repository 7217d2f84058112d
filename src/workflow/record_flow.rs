//! 记录处理流程 - 流程层
//!
//! 核心职责：定义"一条记录"的完整处理流程
//!
//! 流程顺序（每道代码题）：
//! 1. 提取代码块 → 解析语言
//! 2. 提交评测 → 等待结果
//! 3. 解析状态 → 组装报告行
//!
//! 单条记录的失败不会中断整次运行，只会在报告中留下失败标记。

use tracing::{debug, error, info, warn};

use crate::clients::JudgeApi;
use crate::config::Config;
use crate::models::{Catalogs, CodeAnswer, Record, ReportRow, TrackOutcome};
use crate::services::{
    assemble_outcome, describe_status, extract, resolve_language, PollPolicy, SubmissionService,
};
use crate::utils::logging::truncate_text;
use crate::workflow::record_ctx::{RecordCtx, RecordStage};

/// 单条记录的处理结果
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub row: ReportRow,
    pub primary: TrackOutcome,
    pub secondary: TrackOutcome,
}

impl RecordOutcome {
    /// 是否有代码题无法评测
    pub fn has_failure(&self) -> bool {
        self.primary.is_failure() || self.secondary.is_failure()
    }

    /// 失败的代码题：(题号, 原因)
    pub fn failures(&self) -> Vec<(usize, String)> {
        [(1, &self.primary), (2, &self.secondary)]
            .into_iter()
            .filter_map(|(track, outcome)| outcome.failure_reason().map(|reason| (track, reason)))
            .collect()
    }
}

/// 记录处理流程
///
/// - 编排单条记录的处理
/// - 目录只读，由调用方传入
/// - 不持有表格资源
pub struct RecordFlow<'a, J: JudgeApi> {
    catalogs: &'a Catalogs,
    submission: SubmissionService<'a, J>,
    expected_primary: String,
    expected_secondary: String,
    grade_secondary: bool,
    verbose_logging: bool,
}

impl<'a, J: JudgeApi> RecordFlow<'a, J> {
    /// 创建新的记录处理流程
    pub fn new(judge: &'a J, catalogs: &'a Catalogs, config: &Config) -> Self {
        Self {
            catalogs,
            submission: SubmissionService::new(judge, PollPolicy::from_config(config)),
            expected_primary: config.expected_output.clone(),
            expected_secondary: config.expected_output_secondary.clone(),
            grade_secondary: config.grade_secondary,
            verbose_logging: config.verbose_logging,
        }
    }

    pub async fn run(&self, ctx: &RecordCtx, record: &Record) -> RecordOutcome {
        info!("{} 开始处理", ctx);

        let primary = self
            .grade_track(ctx, 1, &record.primary, &self.expected_primary)
            .await;

        let secondary = if self.grade_secondary {
            self.grade_track(ctx, 2, &record.secondary, &self.expected_secondary)
                .await
        } else {
            TrackOutcome::NotGraded
        };

        let row = assemble_outcome(ctx.index, record, &primary, &secondary);
        debug!("{} 阶段: {}", ctx, RecordStage::Reported);

        RecordOutcome {
            row,
            primary,
            secondary,
        }
    }

    /// 评测一道代码题
    async fn grade_track(
        &self,
        ctx: &RecordCtx,
        track: usize,
        answer: &CodeAnswer,
        expected_output: &str,
    ) -> TrackOutcome {
        let block = extract(&answer.raw);
        if !block.fenced {
            warn!("{} ⚠️ 第 {} 题未找到代码块", ctx, track);
            return TrackOutcome::NoCodeBlock {
                raw: answer.raw.clone(),
            };
        }
        debug!("{} 第 {} 题阶段: {}", ctx, track, RecordStage::Extracted);

        if self.verbose_logging {
            info!("{} 第 {} 题代码: {}", ctx, track, truncate_text(&block.body, 80));
        }

        if !block.has_tag() {
            warn!("{} ⚠️ 第 {} 题代码块缺少语言标记", ctx, track);
            return TrackOutcome::UnsupportedLanguage { block };
        }

        let Some(language_id) = resolve_language(&block.tag, &self.catalogs.languages) else {
            warn!("{} ⚠️ 第 {} 题语言无法识别: {}", ctx, track, block.tag);
            return TrackOutcome::UnsupportedLanguage { block };
        };
        info!(
            "{} 🔍 第 {} 题语言: {} → {}",
            ctx, track, block.tag, language_id
        );

        let submitted = self
            .submission
            .submit(language_id, &block.body, expected_output)
            .await;
        let result = match submitted {
            Ok(result) => result,
            Err(e) => {
                if e.is_transport() {
                    warn!("{} ⚠️ 第 {} 题请求评测服务失败: {}", ctx, track, e);
                } else {
                    error!("{} ❌ 第 {} 题评测失败: {}", ctx, track, e);
                }
                return TrackOutcome::Failed {
                    block,
                    error: e.to_string(),
                };
            }
        };
        debug!("{} 第 {} 题阶段: {}", ctx, track, RecordStage::Submitted);

        let status = describe_status(result.status_id, &self.catalogs.statuses);
        info!(
            "{} ✓ 第 {} 题评测完成: {} (耗时: {})",
            ctx,
            track,
            status,
            result.time.as_deref().unwrap_or("-")
        );
        if !result.stderr.is_empty() || !result.compile_output.is_empty() {
            debug!(
                "{} 第 {} 题 stderr: {} | compile_output: {}",
                ctx,
                track,
                truncate_text(&result.stderr, 200),
                truncate_text(&result.compile_output, 200)
            );
        }

        TrackOutcome::Graded {
            block,
            result,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CodeBlock;

    #[test]
    fn test_failures_lists_failed_tracks() {
        let outcome = RecordOutcome {
            row: ReportRow::default(),
            primary: TrackOutcome::NoCodeBlock {
                raw: "print(1)".to_string(),
            },
            secondary: TrackOutcome::Failed {
                block: CodeBlock {
                    tag: "go".to_string(),
                    body: "x".to_string(),
                    fenced: true,
                },
                error: "timeout".to_string(),
            },
        };

        assert!(outcome.has_failure());
        let failures = outcome.failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0], (1, "未找到代码块".to_string()));
        assert_eq!(failures[1], (2, "评测失败: timeout".to_string()));
    }

    #[test]
    fn test_not_graded_is_not_failure() {
        let outcome = RecordOutcome {
            row: ReportRow::default(),
            primary: TrackOutcome::NotGraded,
            secondary: TrackOutcome::NotGraded,
        };
        assert!(!outcome.has_failure());
        assert!(outcome.failures().is_empty());
    }
}

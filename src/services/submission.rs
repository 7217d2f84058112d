//! 评测提交服务 - 业务能力层
//!
//! 只负责"提交一段代码并拿到结果"，不关心记录和报告
//!
//! 评测服务是异步执行的，创建后立即查询可能看到"排队中 / 运行中"。
//! 这里按指数退避反复查询，直到看到结束状态或达到次数上限；
//! `poll_max_attempts = 1` 时与只查询一次的行为一致。

use crate::clients::JudgeApi;
use crate::config::Config;
use crate::error::ApiResult;
use crate::models::{LanguageId, SubmissionResult};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// 轮询参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub initial_interval: Duration,
    pub max_interval: Duration,
}

impl PollPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_attempts: config.poll_max_attempts.max(1),
            initial_interval: Duration::from_millis(config.poll_interval_ms),
            max_interval: Duration::from_millis(config.poll_max_interval_ms),
        }
    }

    /// 只查询一次
    pub fn single_fetch() -> Self {
        Self {
            max_attempts: 1,
            initial_interval: Duration::ZERO,
            max_interval: Duration::ZERO,
        }
    }

    /// 第 `attempt` 次查询（从1开始）之后的等待时间
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
        self.initial_interval
            .checked_mul(factor)
            .unwrap_or(self.max_interval)
            .min(self.max_interval)
    }
}

/// 评测提交服务
pub struct SubmissionService<'a, J: JudgeApi> {
    judge: &'a J,
    policy: PollPolicy,
}

impl<'a, J: JudgeApi> SubmissionService<'a, J> {
    pub fn new(judge: &'a J, policy: PollPolicy) -> Self {
        Self { judge, policy }
    }

    /// 创建评测并等待结果
    ///
    /// 达到查询上限仍未结束时返回最后一次的结果（状态为排队中 / 运行中）
    pub async fn submit(
        &self,
        language_id: LanguageId,
        source_code: &str,
        expected_output: &str,
    ) -> ApiResult<SubmissionResult> {
        let token = self
            .judge
            .create_submission(language_id, source_code, expected_output)
            .await?;
        debug!("评测已创建，token: {}", token);

        let mut attempt = 1;
        loop {
            let result = self.judge.fetch_submission(&token).await?;

            if !result.is_pending() {
                debug!("评测 {} 完成，状态 {} (第 {} 次查询)", token, result.status_id, attempt);
                return Ok(result);
            }

            if attempt >= self.policy.max_attempts {
                warn!(
                    "⚠️ 评测 {} 查询 {} 次后仍未完成 (状态 {})",
                    token, attempt, result.status_id
                );
                return Ok(result);
            }

            let delay = self.policy.delay_after(attempt);
            debug!("评测 {} 尚未完成，{:?} 后重试", token, delay);
            sleep(delay).await;
            attempt += 1;
        }
    }
}

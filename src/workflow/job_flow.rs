//! 单个任务执行流程 - 流程层
//!
//! 核心职责：定义"一个任务"的完整执行流程
//!
//! 流程顺序：
//! 1. 构造下载命令（格式选择串 + 输出模板）
//! 2. 执行，成功立即返回
//! 3. 失败且还有剩余次数 → 固定退避后重试
//! 4. 次数用尽 → 记为失败

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::AttemptError;
use crate::infrastructure::{Invocation, ProcessRunner, Waiter};
use crate::models::{Job, JobOutcome};
use crate::services::build_fetch_invocation;
use crate::utils::logging::truncate_text;

/// 两次尝试之间的固定退避，与任务间隔无关
pub const RETRY_BACKOFF: Duration = Duration::from_secs(2);

/// 任务执行器
///
/// - 不持有任何跨任务的可变状态
/// - 每次尝试启动一个外部进程
/// - 进程启动失败与非零退出同等对待，都只消耗一次尝试
#[derive(Clone)]
pub struct JobExecutor {
    runner: Arc<dyn ProcessRunner>,
    waiter: Arc<dyn Waiter>,
}

impl JobExecutor {
    pub fn new(runner: Arc<dyn ProcessRunner>, waiter: Arc<dyn Waiter>) -> Self {
        Self { runner, waiter }
    }

    /// 执行一个任务
    pub async fn execute(&self, job: &Job, config: &RunConfig) -> JobOutcome {
        let invocation = build_fetch_invocation(job, config);
        let budget = config.attempt_budget();

        for attempt in 1..=budget {
            info!("  第 {}/{} 次尝试...", attempt, budget);

            match self.attempt(&invocation).await {
                Ok(()) => {
                    info!("  ✓ 成功");
                    return JobOutcome::success(job.clone(), attempt);
                }
                Err(e) => {
                    warn!("  ✗ 失败: {}", truncate_text(e.to_string().trim(), 100));
                    if attempt < budget {
                        info!("  {} 秒后重试...", RETRY_BACKOFF.as_secs());
                        self.waiter.wait(RETRY_BACKOFF).await;
                    }
                }
            }
        }

        warn!("  ❌ '{}' 已用尽 {} 次尝试", job.name(), budget);
        JobOutcome::exhausted(job.clone(), budget)
    }

    async fn attempt(&self, invocation: &Invocation) -> Result<(), AttemptError> {
        let output = self.runner.run(invocation).await?;
        if output.success {
            Ok(())
        } else {
            Err(AttemptError::ExitStatus {
                code: output.code,
                stderr: output.stderr,
            })
        }
    }
}

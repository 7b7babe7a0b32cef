//! 批量执行器 - 编排层
//!
//! ## 职责
//!
//! 1. **顺序执行**：按输入顺序逐个委托 `JobExecutor`
//! 2. **任务间隔**：相邻任务之间等待配置的秒数（最后一个之后不等待，模拟运行同样等待）
//! 3. **统计汇总**：结果只在这里合并为 `RunSummary`
//!
//! 单个任务失败不会中断批量，后续任务照常执行。

use std::sync::Arc;

use crate::config::RunConfig;
use crate::infrastructure::Waiter;
use crate::models::{Job, RunSummary};
use crate::utils::logging::{log_inter_job_wait, log_job_start};
use crate::workflow::JobExecutor;

/// 批量执行器
pub struct BatchRunner {
    executor: JobExecutor,
    waiter: Arc<dyn Waiter>,
}

impl BatchRunner {
    pub fn new(executor: JobExecutor, waiter: Arc<dyn Waiter>) -> Self {
        Self { executor, waiter }
    }

    /// 顺序执行所有任务并返回统计
    pub async fn run(&self, jobs: &[Job], config: &RunConfig) -> RunSummary {
        let mut summary = RunSummary::default();
        let total = jobs.len();

        for (index, job) in jobs.iter().enumerate() {
            let position = index + 1;
            log_job_start(position, total, job);

            let outcome = self.executor.execute(job, config).await;
            summary.record(&outcome);

            if position < total && !config.inter_job_delay.is_zero() {
                log_inter_job_wait(config.inter_job_delay.as_secs());
                self.waiter.wait(config.inter_job_delay).await;
            }
        }

        summary
    }
}

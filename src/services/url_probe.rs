//! 地址探测 - 业务能力层
//!
//! 用下载工具的模拟模式逐个检查地址是否可访问，不下载任何内容。
//! 所有条目都会被探测，最后汇总无效条目。

use std::time::Duration;

use tracing::{info, warn};

use crate::infrastructure::ProcessRunner;
use crate::models::Job;
use crate::services::fetch_command::build_probe_invocation;
use crate::utils::logging::truncate_text;

/// 探测结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub checked: usize,
    /// 无效条目的名称，按输入顺序
    pub invalid: Vec<String>,
}

impl ProbeReport {
    pub fn all_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// 地址探测器
pub struct UrlProbe<'a> {
    runner: &'a dyn ProcessRunner,
    fetch_tool: &'a str,
    timeout: Duration,
}

impl<'a> UrlProbe<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, fetch_tool: &'a str, timeout: Duration) -> Self {
        Self {
            runner,
            fetch_tool,
            timeout,
        }
    }

    /// 依次探测所有任务
    pub async fn probe_all(&self, jobs: &[Job]) -> ProbeReport {
        info!("正在测试 {} 个地址...", jobs.len());
        let mut report = ProbeReport::default();

        for (index, job) in jobs.iter().enumerate() {
            info!(
                "  [{}/{}] 测试 '{}': {}",
                index + 1,
                jobs.len(),
                job.name(),
                truncate_text(job.source(), 50)
            );

            let invocation = build_probe_invocation(self.fetch_tool, job, self.timeout);
            match self.runner.run(&invocation).await {
                Ok(output) if output.success => info!("    ✓ 有效"),
                Ok(_) => {
                    warn!("    ✗ 无效或无法访问");
                    report.invalid.push(job.name().to_string());
                }
                Err(e) => {
                    warn!("    ✗ 错误: {}", e);
                    report.invalid.push(job.name().to_string());
                }
            }
            report.checked += 1;
        }

        report
    }
}

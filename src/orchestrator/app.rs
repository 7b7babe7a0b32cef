//! 应用入口 - 编排层
//!
//! ## 运行顺序
//!
//! 1. **检查模式**：如指定 `--test`，只做检查后返回
//! 2. **参数校验**：数值、格式、扩展名，失败即终止
//! 3. **依赖检查**：下载工具与转码工具必须在 PATH 中
//! 4. **加载条目**：解析失败即终止；没有条目时直接成功返回
//! 5. **准备输出目录**：非模拟运行且目录不存在时询问用户
//! 6. **批量执行**：委托 `BatchRunner`
//! 7. **统计输出**：汇总并映射为退出状态
//!
//! 第 2~5 步的任何错误都发生在启动外部进程之前。

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::TestMode;
use crate::config::Config;
use crate::infrastructure::{ProcessRunner, TokioProcessRunner, TokioWaiter, Waiter};
use crate::models::{load_entries, RunStatus};
use crate::orchestrator::batch_runner::BatchRunner;
use crate::orchestrator::self_test::run_self_test;
use crate::services::{ensure_dependencies, ensure_output_dir, validate, DirStatus};
use crate::utils::logging::{append_summary, init_log_file, log_run_header, print_final_stats};
use crate::workflow::JobExecutor;

/// 应用主结构
pub struct App {
    config: Config,
    runner: Arc<dyn ProcessRunner>,
    waiter: Arc<dyn Waiter>,
}

impl App {
    /// 使用真实的进程执行器与计时器
    pub fn new(config: Config) -> Self {
        Self::with_capabilities(config, Arc::new(TokioProcessRunner), Arc::new(TokioWaiter))
    }

    /// 注入自定义的执行与等待能力
    pub fn with_capabilities(
        config: Config,
        runner: Arc<dyn ProcessRunner>,
        waiter: Arc<dyn Waiter>,
    ) -> Self {
        Self {
            config,
            runner,
            waiter,
        }
    }

    /// 运行应用主逻辑（交互提示使用标准输入输出）
    pub async fn run(&self, test_mode: Option<TestMode>) -> Result<RunStatus> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        self.run_with_prompt(test_mode, &mut input, &mut output).await
    }

    /// 运行应用主逻辑，交互提示走给定的读写端
    pub async fn run_with_prompt<R: BufRead, W: Write>(
        &self,
        test_mode: Option<TestMode>,
        input: &mut R,
        output: &mut W,
    ) -> Result<RunStatus> {
        if let Some(mode) = test_mode {
            return Ok(run_self_test(mode, &self.config, self.runner.as_ref()).await);
        }

        let run_config = validate(&self.config)?;
        ensure_dependencies(&[&self.config.fetch_tool, &self.config.transcoder_tool])?;

        let jobs = load_entries(&self.config.input)
            .await
            .with_context(|| format!("加载条目文件失败: {}", self.config.input.display()))?;
        if jobs.is_empty() {
            info!("{} 中没有条目", self.config.input.display());
            return Ok(RunStatus::Success);
        }

        if !run_config.dry_run
            && ensure_output_dir(&run_config.output_dir, input, output)? == DirStatus::Declined
        {
            return Ok(RunStatus::Failure);
        }

        if let Some(log_file) = &self.config.output_log_file {
            init_log_file(log_file)
                .with_context(|| format!("无法创建日志文件: {}", log_file.display()))?;
        }

        log_run_header(&run_config, jobs.len());

        let executor = JobExecutor::new(self.runner.clone(), self.waiter.clone());
        let summary = BatchRunner::new(executor, self.waiter.clone())
            .run(&jobs, &run_config)
            .await;

        print_final_stats(&summary);

        if let Some(log_file) = &self.config.output_log_file {
            match append_summary(log_file, &summary) {
                Ok(()) => info!("\n日志已保存至: {}", log_file.display()),
                Err(e) => warn!("⚠️ {}", e),
            }
        }

        Ok(summary.status())
    }
}

//! # Media Batch DL
//!
//! 调用外部下载工具（yt-dlp）批量下载媒体文件，支持重试与请求间隔。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - `Job` / `JobOutcome` / `RunSummary`，格式与扩展名的封闭枚举
//! - `models/loaders` - 条目文件解析（`名称:地址`）
//!
//! ### ② 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有进程与计时器资源，只暴露能力
//! - `ProcessRunner` - 运行外部命令，`Waiter` - 等待
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - 配置校验、命令构造、依赖检查、地址探测、输出目录准备
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 定义"一个任务"的完整执行流程（尝试 → 退避 → 重试）
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/` - 顺序执行所有任务、汇总统计、映射退出状态

pub mod about;
pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_support;

// 重新导出常用类型
pub use cli::{Cli, TestMode};
pub use config::{Config, RunConfig};
pub use error::{AppError, AppResult, AttemptError, EntryDefect};
pub use models::{Job, JobOutcome, RunStatus, RunSummary};
pub use orchestrator::{App, BatchRunner};
pub use workflow::JobExecutor;

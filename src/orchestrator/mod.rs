//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 校验配置、检查依赖、加载条目、准备输出目录
//! - 组装执行器并输出最终统计
//!
//! ### `batch_runner` - 批量执行器
//! - 按输入顺序逐个执行任务（`Vec<Job>`）
//! - 控制任务间隔
//! - 汇总 `RunSummary`
//!
//! ### `self_test` - 检查模式
//! - 依赖检查与地址探测，不下载
//!
//! ## 层次关系
//!
//! ```text
//! app
//!     ↓
//! batch_runner (处理 Vec<Job>)
//!     ↓
//! workflow::JobExecutor (处理单个 Job)
//!     ↓
//! services (能力层：校验 / 命令构造 / 依赖 / 目录)
//!     ↓
//! infrastructure (基础设施：ProcessRunner / Waiter)
//! ```

pub mod app;
pub mod batch_runner;

pub use app::App;
pub use batch_runner::BatchRunner;
pub use self_test::run_self_test;

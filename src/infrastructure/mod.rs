//! 基础设施层：持有操作系统资源，只暴露能力

pub mod process_runner;
pub mod waiter;

pub use process_runner::{Invocation, ProcessOutput, ProcessRunner, TokioProcessRunner};
pub use waiter::{TokioWaiter, Waiter};

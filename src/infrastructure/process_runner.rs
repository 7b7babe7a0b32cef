//! 外部进程执行器 - 基础设施层
//!
//! 只暴露"运行一条命令并拿到退出状态"的能力，不认识 Job / RunConfig。

use std::io;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// 一次外部命令调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// 超时后进程被杀死，按 `TimedOut` 错误返回
    pub timeout: Option<Duration>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// 是否带有某个参数
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

/// 进程结束后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// 退出码，被信号终止时为 `None`
    pub code: Option<i32>,
    pub success: bool,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            success: true,
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            success: false,
            stderr: stderr.into(),
        }
    }
}

/// 外部进程执行能力
///
/// 执行器只依赖这个 trait，测试时可以替换成脚本化的实现。
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput>;
}

/// 基于 `tokio::process` 的实现
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        debug!("执行: {} {}", invocation.program, invocation.args.join(" "));

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match invocation.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("{} 超时 ({} 秒)", invocation.program, limit.as_secs()),
                    )
                })??,
            None => command.output().await?,
        };

        Ok(ProcessOutput {
            code: output.status.code(),
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use media_batch_dl::infrastructure::{Invocation, ProcessOutput, ProcessRunner, Waiter};
use media_batch_dl::{App, Config};

/// 按顺序返回预设退出码的执行器，脚本用完后一律成功
#[derive(Default)]
pub struct FakeFetchTool {
    exit_codes: Mutex<VecDeque<i32>>,
    calls: Mutex<Vec<Invocation>>,
}

impl FakeFetchTool {
    pub fn with_exit_codes(codes: impl IntoIterator<Item = i32>) -> Arc<Self> {
        Arc::new(Self {
            exit_codes: Mutex::new(codes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for FakeFetchTool {
    async fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        match self.exit_codes.lock().unwrap().pop_front().unwrap_or(0) {
            0 => Ok(ProcessOutput::ok()),
            code => Ok(ProcessOutput::failed(code, "ERROR: Video unavailable")),
        }
    }
}

/// 不真正等待
#[derive(Default)]
pub struct InstantWaiter {
    waits: Mutex<Vec<Duration>>,
}

impl InstantWaiter {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Waiter for InstantWaiter {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

/// 在临时目录中写入条目文件，并把两个外部工具都指向一定存在的 `sh`
pub fn config_in(dir: &Path, entries: &str) -> Config {
    let input = dir.join("urls.txt");
    std::fs::write(&input, entries).unwrap();
    Config {
        input,
        output: dir.join("output"),
        delay: 0,
        fetch_tool: "sh".to_string(),
        transcoder_tool: "sh".to_string(),
        ..Config::default()
    }
}

pub fn app(config: Config, tool: &Arc<FakeFetchTool>, waiter: &Arc<InstantWaiter>) -> App {
    App::with_capabilities(config, tool.clone(), waiter.clone())
}

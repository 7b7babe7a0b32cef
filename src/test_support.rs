//! 单元测试用的替身实现

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::infrastructure::{Invocation, ProcessOutput, ProcessRunner, Waiter};

/// 预设的单次调用结果
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Succeed,
    Fail(i32),
    SpawnError,
}

/// 按顺序返回预设结果的执行器，脚本用完后一律成功
#[derive(Default)]
pub struct ScriptedRunner {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        let step = self.steps.lock().unwrap().pop_front().unwrap_or(Step::Succeed);
        match step {
            Step::Succeed => Ok(ProcessOutput::ok()),
            Step::Fail(code) => Ok(ProcessOutput::failed(code, "ERROR: unable to download")),
            Step::SpawnError => Err(io::Error::new(io::ErrorKind::NotFound, "no such tool")),
        }
    }
}

/// 只记录等待时长、不真正等待
#[derive(Default)]
pub struct RecordingWaiter {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingWaiter {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Waiter for RecordingWaiter {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

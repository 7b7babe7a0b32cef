use std::process::ExitCode;

use crate::models::job::JobOutcome;

/// 运行统计
///
/// 由批量执行器按结果逐条累加，`merge` 满足结合律与交换律，乱序完成时也能合并。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    /// 记录一个任务结果
    pub fn record(&mut self, outcome: &JobOutcome) {
        self.total += 1;
        if outcome.succeeded {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// 合并两份统计
    pub fn merge(self, other: RunSummary) -> RunSummary {
        RunSummary {
            total: self.total + other.total,
            succeeded: self.succeeded + other.succeeded,
            failed: self.failed + other.failed,
        }
    }

    /// 最终退出状态
    pub fn status(&self) -> RunStatus {
        if self.failed > 0 {
            RunStatus::Failure
        } else {
            RunStatus::Success
        }
    }
}

/// 进程退出状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// 全部成功（或没有任务）
    Success,
    /// 至少一个任务失败，或运行前检查失败
    Failure,
}

impl RunStatus {
    pub fn code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failure => 1,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.code())
    }
}

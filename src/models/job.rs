use std::fmt;

/// 下载任务
///
/// 由条目文件的一行解析而来，创建后不可变，`name` 是唯一标识。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    name: String,
    source: String,
}

impl Job {
    /// 创建任务（调用方保证两侧已去除空白且非空）
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// 任务名（同时也是输出文件名）
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 源地址
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.name, self.source)
    }
}

/// 单个任务的执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub job: Job,
    pub succeeded: bool,
    /// 实际尝试次数（至少为 1）
    pub attempts_used: u32,
}

impl JobOutcome {
    pub fn success(job: Job, attempts_used: u32) -> Self {
        Self {
            job,
            succeeded: true,
            attempts_used,
        }
    }

    pub fn exhausted(job: Job, attempts_used: u32) -> Self {
        Self {
            job,
            succeeded: false,
            attempts_used,
        }
    }
}

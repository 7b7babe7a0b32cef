use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::MediaTarget;

/// 程序配置（未校验）
///
/// 优先级从低到高：默认值 → TOML 配置文件 → 环境变量 → 命令行参数。
/// 数值保留有符号类型，负数交给校验器拒绝。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 条目文件路径
    pub input: PathBuf,
    /// 输出目录
    pub output: PathBuf,
    /// 格式代码
    pub format: String,
    /// 输出扩展名
    pub ext: String,
    /// 每个任务的最大尝试次数
    pub retry: i64,
    /// 任务之间的等待秒数
    pub delay: i64,
    /// 只模拟，不写出文件
    pub dry_run: bool,
    // --- 外部工具 ---
    pub fetch_tool: String,
    pub transcoder_tool: String,
    /// 地址探测超时（秒）
    pub probe_timeout_secs: u64,
    // --- 日志 ---
    pub verbose_logging: bool,
    /// 运行日志文件（可选）
    pub output_log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("urls.txt"),
            output: PathBuf::from("output"),
            format: "ba+bv".to_string(),
            ext: "mp4".to_string(),
            retry: 3,
            delay: 1,
            dry_run: false,
            fetch_tool: "yt-dlp".to_string(),
            transcoder_tool: "ffmpeg".to_string(),
            probe_timeout_secs: 30,
            verbose_logging: false,
            output_log_file: None,
        }
    }
}

impl Config {
    /// 默认值 + 环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 读取 TOML 配置文件，缺省的键取默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|message| AppError::ConfigFile {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// 用环境变量覆盖当前值，解析失败的变量被忽略
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            input: lookup("MEDIA_DL_INPUT").map(PathBuf::from).unwrap_or(self.input),
            output: lookup("MEDIA_DL_OUTPUT").map(PathBuf::from).unwrap_or(self.output),
            format: lookup("MEDIA_DL_FORMAT").unwrap_or(self.format),
            ext: lookup("MEDIA_DL_EXT").unwrap_or(self.ext),
            retry: parse_var(&lookup, "MEDIA_DL_RETRY").unwrap_or(self.retry),
            delay: parse_var(&lookup, "MEDIA_DL_DELAY").unwrap_or(self.delay),
            dry_run: self.dry_run,
            fetch_tool: lookup("MEDIA_DL_FETCH_TOOL").unwrap_or(self.fetch_tool),
            transcoder_tool: lookup("MEDIA_DL_TRANSCODER").unwrap_or(self.transcoder_tool),
            probe_timeout_secs: parse_var(&lookup, "MEDIA_DL_PROBE_TIMEOUT").unwrap_or(self.probe_timeout_secs),
            verbose_logging: parse_var(&lookup, "MEDIA_DL_VERBOSE").unwrap_or(self.verbose_logging),
            output_log_file: lookup("MEDIA_DL_LOG_FILE")
                .map(PathBuf::from)
                .or(self.output_log_file),
        }
    }

    /// 地址探测超时
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

/// 读取并解析单个环境变量，缺失或解析失败时返回 `None`
fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

/// 已校验的运行配置，运行期间只读
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub output_dir: PathBuf,
    pub target: MediaTarget,
    pub retry_limit: u32,
    pub inter_job_delay: Duration,
    pub dry_run: bool,
    /// 下载工具的可执行文件名或路径
    pub fetch_tool: String,
}

impl RunConfig {
    /// 每个任务实际可用的尝试次数（`retry_limit` 为 0 时仍尝试一次）
    pub fn attempt_budget(&self) -> u32 {
        self.retry_limit.max(1)
    }
}

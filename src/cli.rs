//! 命令行参数
//!
//! 所有下载参数都是可选的，未给出时沿用配置文件 / 环境变量 / 默认值。

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::error::AppResult;

/// 基于 yt-dlp 与 ffmpeg 的批量媒体下载工具
#[derive(Parser, Debug, Default)]
#[command(name = "media_batch_dl")]
#[command(about = "基于 yt-dlp 与 ffmpeg 的批量媒体下载工具")]
pub struct Cli {
    /// 条目文件路径，每行 `名称:地址`（默认: urls.txt）
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 输出目录（默认: output）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 格式代码: ba / bestaudio, bv / bestvideo, ba+bv / bestaudio+bestvideo（默认: ba+bv）
    #[arg(short, long)]
    pub format: Option<String>,

    /// 输出扩展名（默认: mp4）
    #[arg(short, long)]
    pub ext: Option<String>,

    /// 每个条目的尝试次数（默认: 3）
    #[arg(short, long, allow_negative_numbers = true)]
    pub retry: Option<i64>,

    /// 条目之间的等待秒数（默认: 1）
    #[arg(short, long, allow_negative_numbers = true)]
    pub delay: Option<i64>,

    /// 模拟运行，不下载任何文件
    #[arg(long)]
    pub dry_run: bool,

    /// 运行检查: url 检查地址, dep 检查依赖, all 两者都检查
    #[arg(short, long, value_enum)]
    pub test: Option<TestMode>,

    /// TOML 配置文件
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(long)]
    pub verbose: bool,

    /// 显示版本信息
    #[arg(short = 'v', long)]
    pub version: bool,

    /// 显示许可证
    #[arg(short, long)]
    pub license: bool,

    /// 显示仓库地址
    #[arg(short = 'R', long)]
    pub repo: bool,

    /// 显示用法示例
    #[arg(short = 'x', long)]
    pub example: bool,
}

/// 检查模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// 检查条目文件与地址
    Url,
    /// 检查外部依赖
    Dep,
    /// 依次执行 dep 与 url
    All,
}

impl TestMode {
    pub fn checks_dependencies(self) -> bool {
        matches!(self, TestMode::Dep | TestMode::All)
    }

    pub fn checks_urls(self) -> bool {
        matches!(self, TestMode::Url | TestMode::All)
    }
}

/// 只输出信息、不执行下载的请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoRequest {
    Version,
    License,
    Repository,
    Examples,
}

impl Cli {
    /// 第一个被设置的信息类参数
    pub fn info_request(&self) -> Option<InfoRequest> {
        if self.version {
            Some(InfoRequest::Version)
        } else if self.license {
            Some(InfoRequest::License)
        } else if self.repo {
            Some(InfoRequest::Repository)
        } else if self.example {
            Some(InfoRequest::Examples)
        } else {
            None
        }
    }

    /// 按 默认值 → 配置文件 → 环境变量 → 命令行 的顺序合成配置
    pub fn resolve_config(&self) -> AppResult<Config> {
        let base = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::default(),
        };
        Ok(self.apply(base.with_env_overrides()))
    }

    /// 用命令行参数覆盖配置
    pub fn apply(&self, config: Config) -> Config {
        Config {
            input: self.input.clone().unwrap_or(config.input),
            output: self.output.clone().unwrap_or(config.output),
            format: self.format.clone().unwrap_or(config.format),
            ext: self.ext.clone().unwrap_or(config.ext),
            retry: self.retry.unwrap_or(config.retry),
            delay: self.delay.unwrap_or(config.delay),
            dry_run: self.dry_run || config.dry_run,
            verbose_logging: self.verbose || config.verbose_logging,
            ..config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from([
            "media_batch_dl", "-i", "list.txt", "-o", "videos", "-f", "ba", "-e", "mp3", "-r", "5", "-d", "2",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("list.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("videos")));
        assert_eq!(cli.format.as_deref(), Some("ba"));
        assert_eq!(cli.ext.as_deref(), Some("mp3"));
        assert_eq!(cli.retry, Some(5));
        assert_eq!(cli.delay, Some(2));
        assert!(cli.info_request().is_none());
    }

    #[test]
    fn test_negative_numbers_accepted_for_validation() {
        let cli = Cli::parse_from(["media_batch_dl", "-r", "-1", "--delay", "-3"]);
        assert_eq!(cli.retry, Some(-1));
        assert_eq!(cli.delay, Some(-3));
    }

    #[test]
    fn test_test_mode_values() {
        let cli = Cli::parse_from(["media_batch_dl", "--test", "all"]);
        let mode = cli.test.unwrap();
        assert!(mode.checks_dependencies() && mode.checks_urls());
        assert!(Cli::try_parse_from(["media_batch_dl", "-t", "everything"]).is_err());
    }

    #[test]
    fn test_info_flags() {
        assert_eq!(
            Cli::parse_from(["media_batch_dl", "-v"]).info_request(),
            Some(InfoRequest::Version)
        );
        assert_eq!(
            Cli::parse_from(["media_batch_dl", "-R"]).info_request(),
            Some(InfoRequest::Repository)
        );
        assert_eq!(
            Cli::parse_from(["media_batch_dl", "--example"]).info_request(),
            Some(InfoRequest::Examples)
        );
    }

    #[test]
    fn test_apply_only_overrides_given_flags() {
        let cli = Cli::parse_from(["media_batch_dl", "-f", "bv", "--dry-run"]);
        let config = cli.apply(Config {
            retry: 9,
            ..Config::default()
        });
        assert_eq!(config.format, "bv");
        assert_eq!(config.retry, 9);
        assert_eq!(config.ext, "mp4");
        assert!(config.dry_run);
    }
}

//! 依赖检查 - 业务能力层
//!
//! 确认下载工具与转码工具都能在 PATH 中找到。转码工具由下载工具间接调用，
//! 这里只检查它是否存在。

use std::path::PathBuf;

use tracing::debug;

use crate::error::{AppError, AppResult};

/// 依赖检查结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    pub found: Vec<(String, PathBuf)>,
    pub missing: Vec<String>,
}

impl DependencyReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// 有缺失时转为错误
    pub fn into_result(self) -> AppResult<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(AppError::MissingDependency {
                missing: self.missing,
            })
        }
    }
}

/// 逐个查找工具，保持传入顺序
pub fn check_dependencies<S: AsRef<str>>(tools: &[S]) -> DependencyReport {
    let mut report = DependencyReport::default();

    for tool in tools {
        let tool = tool.as_ref();
        match which::which(tool) {
            Ok(path) => {
                debug!("找到 {}: {}", tool, path.display());
                report.found.push((tool.to_string(), path));
            }
            Err(_) => report.missing.push(tool.to_string()),
        }
    }

    report
}

/// 缺少任何一个工具即返回 `MissingDependency`
pub fn ensure_dependencies<S: AsRef<str>>(tools: &[S]) -> AppResult<DependencyReport> {
    check_dependencies(tools).into_result()
}

/// 安装提示
pub fn install_hints() -> &'static [&'static str] {
    &[
        "yt-dlp: pip install yt-dlp",
        "ffmpeg: 从 https://ffmpeg.org/ 下载",
    ]
}

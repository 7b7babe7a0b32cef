//! 输出目录准备 - 业务能力层

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::info;

use crate::error::{AppError, AppResult};

/// 目录准备结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// 目录已存在
    Ready,
    /// 用户确认后新建
    Created,
    /// 用户拒绝创建
    Declined,
}

/// 确保输出目录存在，不存在时询问是否创建
///
/// 只接受 `y` / `yes`（不区分大小写），其余输入（包括空行和 EOF）都视为拒绝。
pub fn ensure_output_dir<R: BufRead, W: Write>(
    dir: &Path,
    input: &mut R,
    output: &mut W,
) -> AppResult<DirStatus> {
    if dir.exists() {
        return Ok(DirStatus::Ready);
    }

    write!(
        output,
        "输出目录 '{}' 不存在，是否创建? (y/n): ",
        dir.display()
    )
    .and_then(|_| output.flush())
    .map_err(|e| AppError::io("无法输出提示", e))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| AppError::io("无法读取用户输入", e))?;

    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        info!("操作已取消");
        return Ok(DirStatus::Declined);
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| AppError::io(format!("无法创建目录 {}", dir.display()), e))?;
    info!("✓ 已创建目录: {}", dir.display());

    Ok(DirStatus::Created)
}

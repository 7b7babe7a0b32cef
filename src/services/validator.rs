//! 配置校验 - 业务能力层
//!
//! 三项检查互相独立且不做 I/O，全部通过后才构造 [`RunConfig`]。

use std::time::Duration;

use crate::config::{Config, RunConfig};
use crate::error::{AppError, AppResult};
use crate::models::{MediaFormat, MediaTarget};

/// 校验格式代码
pub fn validate_format(code: &str) -> AppResult<MediaFormat> {
    MediaFormat::from_code(code).ok_or_else(|| AppError::InvalidFormat {
        code: code.to_string(),
        valid: MediaFormat::valid_codes(),
    })
}

/// 校验扩展名与格式类别是否兼容
pub fn validate_extension(extension: &str, format: MediaFormat) -> AppResult<MediaTarget> {
    MediaTarget::new(format, extension).ok_or_else(|| AppError::IncompatibleExtension {
        extension: extension.to_string(),
        class: format.class(),
        valid: format.class().allowed_extensions().join(", "),
    })
}

/// 校验重试次数与任务间隔
pub fn validate_numbers(retry: i64, delay: i64) -> AppResult<(u32, Duration)> {
    let retry_limit = u32::try_from(retry).map_err(|_| AppError::InvalidConfig {
        field: "retry",
        reason: if retry < 0 {
            format!("必须 >= 0，实际为 {}", retry)
        } else {
            format!("不能超过 {}，实际为 {}", u32::MAX, retry)
        },
    })?;
    let delay_secs = u64::try_from(delay).map_err(|_| AppError::InvalidConfig {
        field: "delay",
        reason: format!("必须 >= 0，实际为 {}", delay),
    })?;
    Ok((retry_limit, Duration::from_secs(delay_secs)))
}

/// 依次执行全部检查并生成运行配置
pub fn validate(config: &Config) -> AppResult<RunConfig> {
    let (retry_limit, inter_job_delay) = validate_numbers(config.retry, config.delay)?;
    let format = validate_format(&config.format)?;
    let target = validate_extension(&config.ext, format)?;

    Ok(RunConfig {
        output_dir: config.output.clone(),
        target,
        retry_limit,
        inter_job_delay,
        dry_run: config.dry_run,
        fetch_tool: config.fetch_tool.clone(),
    })
}

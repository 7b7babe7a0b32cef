/// 日志工具模块
///
/// 提供进度与统计信息的格式化输出
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::config::RunConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Job, RunSummary};

/// 初始化运行日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &Path) -> AppResult<()> {
    let log_header = format!(
        "{}\n批量下载日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .map_err(|e| AppError::io(format!("无法写入日志文件 {}", log_file_path.display()), e))
}

/// 把最终统计追加到日志文件
pub fn append_summary(log_file_path: &Path, summary: &RunSummary) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .map_err(|e| AppError::io(format!("无法打开日志文件 {}", log_file_path.display()), e))?;

    let text = format!(
        "完成时间: {}\n总计: {}\n成功: {}\n失败: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        summary.total,
        summary.succeeded,
        summary.failed
    );
    file.write_all(text.as_bytes())
        .map_err(|e| AppError::io(format!("无法写入日志文件 {}", log_file_path.display()), e))
}

/// 记录运行参数
///
/// # 参数
/// - `config`: 运行配置
/// - `total`: 任务总数
pub fn log_run_header(config: &RunConfig, total: usize) {
    for line in run_header_lines(config, total) {
        info!("{}", line);
    }
}

/// 运行参数的各行文本，尝试次数按实际预算显示
fn run_header_lines(config: &RunConfig, total: usize) -> Vec<String> {
    let mut lines = vec!["=".repeat(60)];
    if config.dry_run {
        lines.push("🧪 模拟运行模式 - 不会下载任何文件".to_string());
    }
    lines.push(format!("🚀 开始下载 {} 个条目", total));
    lines.push("=".repeat(60));
    lines.push(format!("格式: {}", config.target.format()));
    lines.push(format!("扩展名: {}", config.target.extension()));
    lines.push(format!("输出目录: {}", config.output_dir.display()));
    lines.push(format!("尝试次数: {}", config.attempt_budget()));
    lines.push(format!("任务间隔: {}s", config.inter_job_delay.as_secs()));
    lines.push("=".repeat(60));
    lines
}

/// 记录任务开始
pub fn log_job_start(index: usize, total: usize, job: &Job) {
    info!("\n[{}/{}] 处理 '{}': {}", index, total, job.name(), job.source());
}

/// 记录任务间等待
pub fn log_inter_job_wait(secs: u64) {
    info!("  等待 {} 秒...", secs);
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 运行统计
pub fn print_final_stats(summary: &RunSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 下载统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("总计: {}", summary.total);
    info!("✅ 成功: {}", summary.succeeded);
    info!("❌ 失败: {}", summary.failed);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 10), "abcdefghij");
        assert_eq!(truncate_text("abcdefghijk", 10), "abcdefghij...");
        assert_eq!(truncate_text("下载失败了啊", 4), "下载失败...");
    }

    #[test]
    fn test_log_file_header_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        init_log_file(&path).unwrap();
        append_summary(
            &path,
            &RunSummary {
                total: 2,
                succeeded: 1,
                failed: 1,
            },
        )
        .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&"=".repeat(60)));
        assert!(content.contains("总计: 2"));
        assert!(content.contains("失败: 1"));
    }

    #[test]
    fn test_run_header_shows_attempt_budget() {
        use crate::models::{MediaFormat, MediaTarget};
        use std::path::PathBuf;
        use std::time::Duration;

        let mut config = RunConfig {
            output_dir: PathBuf::from("output"),
            target: MediaTarget::new(MediaFormat::from_code("ba").unwrap(), "mp3").unwrap(),
            retry_limit: 0,
            inter_job_delay: Duration::from_secs(1),
            dry_run: true,
            fetch_tool: "yt-dlp".to_string(),
        };
        let lines = run_header_lines(&config, 2);
        assert!(lines.contains(&"尝试次数: 1".to_string()));
        assert!(lines.iter().any(|l| l.contains("模拟运行")));

        config.retry_limit = 4;
        config.dry_run = false;
        let lines = run_header_lines(&config, 2);
        assert!(lines.contains(&"尝试次数: 4".to_string()));
        assert!(!lines.iter().any(|l| l.contains("模拟运行")));
    }
}

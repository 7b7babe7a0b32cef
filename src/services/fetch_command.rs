//! 下载工具命令行构造 - 业务能力层
//!
//! 只负责把任务和配置翻译成参数列表，不执行任何进程。

use std::time::Duration;

use crate::config::RunConfig;
use crate::infrastructure::Invocation;
use crate::models::Job;

/// 输出模板中由下载工具替换为实际扩展名的占位符
const EXT_TOKEN: &str = "%(ext)s";

/// 任务的输出路径模板：`<输出目录>/<任务名>.%(ext)s`
///
/// 名称中的 `%` 转义为 `%%`，避免被下载工具当作模板字段。
pub fn output_template(job: &Job, config: &RunConfig) -> String {
    let name = job.name().replace('%', "%%");
    config
        .output_dir
        .join(format!("{}.{}", name, EXT_TOKEN))
        .to_string_lossy()
        .into_owned()
}

/// 构造一次下载调用
///
/// 仅音频格式请求抽取音频，其余格式请求合并容器。
/// 模拟模式只追加 `--simulate`，其余参数不变。
/// 地址放在 `--` 之后，以 `-` 开头的地址不会被当作选项。
pub fn build_fetch_invocation(job: &Job, config: &RunConfig) -> Invocation {
    let format = config.target.format();
    let extension = config.target.extension().as_str();

    let mut invocation = Invocation::new(&config.fetch_tool).args(["-f", format.selector()]);

    invocation = if format.class().extracts_audio() {
        invocation.args(["--extract-audio", "--audio-format", extension])
    } else {
        invocation.args(["--merge-output-format", extension])
    };

    invocation = invocation.arg("-o").arg(output_template(job, config));

    if config.dry_run {
        invocation = invocation.arg("--simulate");
    }

    invocation.args(["--", job.source()])
}

/// 构造一次地址探测调用（模拟模式，不下载）
pub fn build_probe_invocation(fetch_tool: &str, job: &Job, timeout: Duration) -> Invocation {
    Invocation::new(fetch_tool)
        .args(["--simulate", "--no-warnings", "--", job.source()])
        .with_timeout(timeout)
}

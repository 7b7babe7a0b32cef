use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use media_batch_dl::utils::logger;
use media_batch_dl::{about, App, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // 信息类参数直接输出并退出
    if let Some(request) = cli.info_request() {
        println!("{}", about::render(request));
        return ExitCode::SUCCESS;
    }

    // 合成配置
    let config = cli.resolve_config();
    let verbose = config.as_ref().map_or(cli.verbose, |c| c.verbose_logging);
    logger::init(verbose);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    // 运行应用
    match App::new(config).run(cli.test).await {
        Ok(status) => status.into(),
        Err(e) => {
            error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

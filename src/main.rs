use clap::Parser;
use fintab::config::CliArgs;
use fintab::utils::{logger, validation::Validate};
use fintab::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting fintab server");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    fintab::server::run_server(config).await?;

    Ok(())
}

use clap::Parser;
use ynab_convert::config::cli::USAGE;
use ynab_convert::utils::logger;
use ynab_convert::{CliConfig, ConvertPipeline, EtlEngine};

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            println!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_level.as_deref());
    tracing::debug!("Run config: {:?}", config);
    if !cli.extra.is_empty() {
        tracing::warn!("Ignoring extra arguments: {:?}", cli.extra);
    }

    // 輸出檔名的時間戳只在這裡取一次
    let timestamp = chrono::Utc::now().timestamp();
    let engine = EtlEngine::new(ConvertPipeline::new(config, timestamp));

    match engine.run() {
        Ok(output_path) => {
            println!("Processed CSV written to {}", output_path.display());
        }
        Err(e) => {
            tracing::error!("Conversion failed ({:?}): {}", e.phase(), e);
            println!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}

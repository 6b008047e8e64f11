use clap::Parser;
use dehashed_hunter::core::ConfigProvider;
use dehashed_hunter::utils::logger::{self, LogFormat};
use dehashed_hunter::utils::validation::Validate;
use dehashed_hunter::{CliConfig, DehashedClient, HuntEngine, HuntError, HuntPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, LogFormat::from_json_flag(config.log_json))?;

    tracing::info!("Starting dehashed-hunter");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("❌ Run failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<(), HuntError> {
    // 驗證配置
    config.validate()?;
    let settings = config.api_settings()?;
    tracing::debug!("API settings: {:?}", settings);

    let queries = config.query_source()?.load().await?;
    if queries.is_empty() {
        tracing::warn!("No queries to run");
    }

    let client = DehashedClient::from_config(&settings);
    let pipeline = HuntPipeline::new(client, config.field).with_page_size(settings.page_size());
    let mut engine = HuntEngine::new(pipeline, config.output_options());

    let summary = engine.run(&queries).await?;
    if summary.failed_queries > 0 {
        tracing::warn!(
            "{} of {} queries stopped early because of a failed request",
            summary.failed_queries,
            summary.queries
        );
    }
    tracing::info!("✅ Search completed successfully!");
    Ok(())
}

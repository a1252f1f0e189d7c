use std::sync::Arc;

use clap::Parser;
use desk_client::{HotelApi, HotelClient};
use front_desk::AppConfig;
use front_desk::cli::{self, Cli};
use front_desk::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    cli.apply(&mut config);
    config.validate()?;

    let _log_guard = init_logging(config.log_dir.as_deref())?;
    tracing::info!(base_url = %config.client.base_url, "front-desk starting");

    let api: Arc<dyn HotelApi> = Arc::new(HotelClient::new(&config.client)?);

    if cli.command.requires_session() {
        cli::ensure_session(&config, api.clone()).await?;
    }

    if let Err(e) = cli::run(cli.command, &config, api).await {
        tracing::error!(error = %e, "command failed");
        return Err(e);
    }
    Ok(())
}

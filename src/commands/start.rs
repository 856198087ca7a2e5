use anyhow::Result;
use colored::Colorize;
use kasha_site::{config, init_tracing, server};
use std::path::Path;
use tracing::info;

/// Load configuration, set up logging and run the server until shutdown
pub async fn execute(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    init_tracing(&cfg.server.log_level, &cfg.server.log_format);
    println!("{}", "Starting KaSha site backend...".green());
    info!("Loaded configuration from {}", config_path.display());

    server::start_server(cfg).await?;

    Ok(())
}

use anyhow::Result;
use colored::Colorize;
use kasha_site::config::{self, Config};
use kasha_site::logging::mask_api_key;
use std::path::Path;

/// Execute the config show command
///
/// Displays the current configuration with secrets masked
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Listen: {}:{}", cfg.server.host, cfg.server.port);
    println!(
        "  Range factors: {} / {}",
        cfg.estimator.range_low_factor, cfg.estimator.range_high_factor
    );
    println!(
        "  AI: {}",
        if cfg.ai.enabled && cfg.ai.api_key().is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(())
}

fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.ai.api_key = cfg.ai.api_key().map(mask_api_key);
    sanitized
}

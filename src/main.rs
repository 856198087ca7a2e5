use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let config_path = args.config.clone();

    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&config_path).await?;
        }
        cli::Commands::Test => {
            commands::test::execute(&config_path)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&config_path)?,
            cli::ConfigCommands::Validate => commands::config::validate(&config_path)?,
        },
        cli::Commands::Catalog { event_type } => {
            commands::catalog::execute(&config_path, event_type.as_deref())?;
        }
        cli::Commands::Estimate {
            event_type,
            guests,
            addons,
            json,
        } => {
            commands::estimate::execute(&config_path, event_type, guests, addons, json)?;
        }
        cli::Commands::Version => {
            println!("KaSha site v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::TrackerError;

use clap::Parser;
use cli::{Cli, Commands, commands};
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    match cli.command {
        Commands::Add(args) => commands::cmd_add(&config, args).await,
        Commands::List(args) => commands::cmd_list(&config, args).await,
        Commands::Update(args) => commands::cmd_update(&config, args).await,
        Commands::Remove { id, yes } => commands::cmd_remove(&config, &id, yes).await,
        Commands::Search(args) => commands::cmd_search(&config, args).await,
        Commands::Home => commands::cmd_home(&config).await,
        Commands::Stats => commands::cmd_stats(&config).await,
        Commands::Enrich => commands::cmd_enrich(&config).await,
        Commands::Seed { force } => commands::cmd_seed(&config, force).await,
        Commands::Clear { yes } => commands::cmd_clear(&config, yes).await,
        Commands::Init => {
            Config::create_default_if_missing()?;
            println!("✓ Config file created. Edit config.toml and run again.");
            Ok(())
        }
    }
}

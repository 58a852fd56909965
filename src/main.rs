// src/main.rs

//! stockwatch: Product Stock Change Watcher CLI
//!
//! Runs one check pass per invocation; repeated polling is expected to
//! come from an external scheduler (cron, systemd timer, CI job).

use clap::{Parser, Subcommand};
use env_logger::Env;

use stockwatch::error::Result;
use stockwatch::models::Config;
use stockwatch::pipeline::run_check;
use stockwatch::services::DiscordNotifier;
use stockwatch::storage::FileStatusStore;

#[derive(Parser, Debug)]
#[command(
    name = "stockwatch",
    version,
    about = "Watches a retail product page and notifies Discord on stock changes"
)]

/// CLI Arguments
struct Cli {
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single stock check pass
    Check,
    /// Validate configuration and print the resolved settings
    Validate,
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    match cli.command.unwrap_or(Command::Check) {
        Command::Check => {
            let store = FileStatusStore::new(&config.paths.status_file);
            let notifier = DiscordNotifier::new(&config)?;

            // Fetch and notification failures are absorbed inside the
            // pass; only a broken local environment reaches here.
            run_check(&config, &store, &notifier).await?;
        }
        Command::Validate => {
            println!("Configuration OK");
            println!("  product:     {}", config.watch.product_name);
            println!("  url:         {}", config.watch.product_url);
            println!("  user-agent:  {}", config.http.user_agent);
            println!("  timeout:     {}s", config.http.timeout_secs);
            println!("  status file: {}", config.paths.status_file);
            println!(
                "  webhook:     {}",
                if config.resolve_webhook_url().is_some() {
                    "configured"
                } else {
                    "not configured (notifications will be skipped)"
                }
            );
        }
    }

    Ok(())
}

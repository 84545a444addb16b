//! Career Compass CLI entry point.
//!
//! Binary name: `compass`
//!
//! Parses CLI arguments, loads configuration, seeds the in-memory state,
//! then dispatches to the command handlers.

mod cli;
mod i18n;
mod render;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,compass=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let mut state = AppState::init(&cli.config).await?;

    match cli.command {
        Commands::Ask {
            situation,
            lang,
            no_location,
            strict_markup,
        } => {
            cli::ask::run_ask(&mut state, situation, lang, no_location, strict_markup, cli.json)
                .await?;
        }

        Commands::Banner {
            lang,
            country,
            no_location,
        } => {
            cli::banner::run_banner(&state, lang, country, no_location).await?;
        }

        Commands::Admin { lang } => {
            cli::admin::run_admin(&mut state, lang).await?;
        }
    }

    Ok(())
}

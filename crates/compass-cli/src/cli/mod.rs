//! CLI command definitions and dispatch for the `compass` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod admin;
pub mod ask;
pub mod banner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use compass_types::language::Language;

/// Career advice with grounded sources, plus the promo banner admin.
#[derive(Parser)]
#[command(name = "compass", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to compass.toml.
    #[arg(long, global = true, default_value = "compass.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask for career advice.
    Ask {
        /// Your situation; prompted for interactively when omitted.
        situation: Option<String>,

        /// Answer language.
        #[arg(long, default_value = "en")]
        lang: Language,

        /// Skip the geolocation lookup.
        #[arg(long)]
        no_location: bool,

        /// Treat emphasis markers with strict pair matching instead of
        /// the default split-parity formatting.
        #[arg(long)]
        strict_markup: bool,
    },

    /// Show the rotating promo banner (Ctrl+C to stop).
    Banner {
        /// Banner language.
        #[arg(long, default_value = "en")]
        lang: Language,

        /// Target country code, overriding detection.
        #[arg(long)]
        country: Option<String>,

        /// Skip country detection; show only unrestricted ads.
        #[arg(long)]
        no_location: bool,
    },

    /// Manage ads and view stats (password gated).
    Admin {
        /// Dashboard language.
        #[arg(long, default_value = "en")]
        lang: Language,
    },
}

//! CLI command definitions and dispatch for the `svchook` binary.
//!
//! Uses clap derive macros for argument parsing. Each subcommand is one step
//! (or the whole run) of a billing test scenario.

pub mod check;
pub mod client;
pub mod hook;
pub mod services;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use svchook_types::client::ClientId;

/// Drive the billing service from test suites.
#[derive(Parser)]
#[command(name = "svchook", version, about, long_about = None)]
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

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to the TOML config file.
    #[arg(
        long,
        global = true,
        env = "SVCHOOK_CONFIG",
        default_value = svchook_infra::config::DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the service directory answers.
    Check,

    /// Show the active client (seeding one if none has a positive balance).
    Client,

    /// List all services with their cost.
    #[command(alias = "ls")]
    Services {
        /// Mark the services this client is subscribed to.
        #[arg(long)]
        client: Option<ClientId>,
    },

    /// Subscribe a client to the first service it does not have yet.
    Hook {
        /// Client to act on (defaults to the active client).
        #[arg(long)]
        client: Option<ClientId>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Render a green check mark.
pub fn check_mark() -> String {
    console::style("✓").green().to_string()
}

//! svchook CLI entry point.
//!
//! Binary name: `svchook`
//!
//! Parses CLI arguments, sets up logging, resolves configuration, then
//! dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;
use svchook_observe::tracing_setup::{LogFormat, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,svchook=debug",
        _ => "trace",
    };
    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_tracing(filter, format).map_err(|e| anyhow::anyhow!(e))?;

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "svchook", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(&cli.config).await?;

    match cli.command {
        Commands::Check => cli::check::check(&state, cli.json).await?,
        Commands::Client => cli::client::show_active_client(&state, cli.json).await?,
        Commands::Services { client } => {
            cli::services::list_services(&state, client, cli.json).await?;
        }
        Commands::Hook { client } => cli::hook::hook(&state, client, cli.json).await?,
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

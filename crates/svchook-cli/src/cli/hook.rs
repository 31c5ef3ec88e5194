//! The full hook run: resolve a client and subscribe it to a new service.

use anyhow::Result;
use console::style;

use svchook_core::flow::HookFlow;
use svchook_types::client::ClientId;
use svchook_types::error::HarnessError;

use crate::state::AppState;

pub async fn hook(state: &AppState, client: Option<ClientId>, json: bool) -> Result<()> {
    let flow = HookFlow::new(state.directory()?);
    let mut store = state.open_store().await?;

    let outcome = flow.run(&mut store, client).await;
    let closed = store.close().await;
    let outcome = settle(outcome, closed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Client {} is now subscribed to service {}",
        super::check_mark(),
        style(outcome.client.id).bold(),
        style(outcome.service_id).cyan()
    );
    println!("  Cost:    {}", style(format!("{:.2}", outcome.cost)).yellow());
    println!("  Balance: {:.2} (before the service was added)", outcome.client.balance);
    println!("  Services before this run: {}", outcome.hooked_before);
    println!();
    Ok(())
}

/// Combine the run result with the store close result.
///
/// A failed run wins over a failed close; the close error is only logged.
fn settle<T>(outcome: Result<T, HarnessError>, closed: Result<(), HarnessError>) -> Result<T> {
    match outcome {
        Ok(value) => {
            closed?;
            Ok(value)
        }
        Err(err) => {
            if let Err(close_err) = closed {
                tracing::warn!("Failed to close clients database: {close_err}");
            }
            Err(err.into())
        }
    }
}

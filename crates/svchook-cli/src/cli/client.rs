//! Active client lookup.

use anyhow::Result;
use console::style;

use svchook_core::store::active_client;

use crate::state::AppState;

/// Show the client a test run would act on, seeding one if needed.
pub async fn show_active_client(state: &AppState, json: bool) -> Result<()> {
    let mut store = state.open_store().await?;
    let client = active_client(&mut store).await?;
    store.close().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&client)?);
        return Ok(());
    }

    println!();
    println!("  Client:  {}", style(client.id).bold());
    println!("  Balance: {}", style(format!("{:.2}", client.balance)).green());
    println!();
    Ok(())
}

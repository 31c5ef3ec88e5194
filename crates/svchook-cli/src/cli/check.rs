//! Service directory liveness check.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Report the status code of `GET /` on the directory.
///
/// An unreachable directory is an error, not a failed check.
pub async fn check(state: &AppState, json: bool) -> Result<()> {
    let directory = state.directory()?;
    let status = directory.check_connection().await?;

    if json {
        let out = serde_json::json!({
            "api": state.config.api.base_url(),
            "status": status,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Service directory at {} answered {}",
        super::check_mark(),
        style(state.config.api.base_url()).cyan(),
        style(status).bold()
    );
    println!();
    Ok(())
}

//! Service catalog listing.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use svchook_core::directory::ServiceApi;
use svchook_types::client::ClientId;

use crate::state::AppState;

/// List every service in the directory, marking those the client has.
pub async fn list_services(state: &AppState, client: Option<ClientId>, json: bool) -> Result<()> {
    let directory = state.directory()?;
    let catalog = directory.api().catalog().await?;
    let hooked = match client {
        Some(id) => directory.get_hooked_services(id).await?,
        None => Vec::new(),
    };

    if json {
        let items: Vec<_> = catalog
            .items
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id,
                    "cost": s.cost,
                    "hooked": hooked.contains(&s.id),
                })
            })
            .collect();
        let out = serde_json::json!({
            "count": catalog.count,
            "client_id": client,
            "items": items,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if catalog.items.is_empty() {
        println!();
        println!("  {}", style("There is nothing to hook.").dim());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Cost").fg(Color::White),
    ];
    if client.is_some() {
        header.push(Cell::new("Hooked").fg(Color::White));
    }
    table.set_header(header);

    for service in &catalog.items {
        let cost_cell = match service.cost {
            Some(cost) => Cell::new(format!("{cost:.2}")),
            None => Cell::new("unknown").fg(Color::DarkGrey),
        };
        let mut row = vec![Cell::new(service.id), cost_cell];
        if client.is_some() {
            row.push(if hooked.contains(&service.id) {
                Cell::new("● yes").fg(Color::Green)
            } else {
                Cell::new("○ no").fg(Color::DarkGrey)
            });
        }
        table.add_row(row);
    }

    println!();
    println!("{table}");
    println!();
    Ok(())
}

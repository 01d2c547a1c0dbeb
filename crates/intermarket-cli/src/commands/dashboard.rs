use serde_json::{json, Value};

use intermarket_core::{load_dashboard, DashboardClient, DashboardState, FetchSlot};

use crate::error::CliError;

use super::{history, snapshot, Report};

/// Fetch both independent slices and render whatever arrived. A failed
/// fetch already logged its diagnostic; here its slot simply stays in
/// the loading placeholder.
pub async fn run(client: &DashboardClient) -> Result<Report, CliError> {
    let state = load_dashboard(client).await;

    let data = json!({
        "snapshot": slot_value(&state.snapshot)?,
        "history": slot_value(&state.history)?,
    });

    Ok(Report::new("/api/market-data+/api/history", data, table_lines(&state)))
}

fn slot_value<T: serde::Serialize>(slot: &FetchSlot<T>) -> Result<Value, CliError> {
    Ok(match slot {
        FetchSlot::Ready(view) => json!({ "state": "ready", "data": serde_json::to_value(view)? }),
        FetchSlot::Loading => json!({ "state": "loading" }),
    })
}

fn table_lines(state: &DashboardState) -> Vec<String> {
    let mut lines = vec![String::from("InterMarket Insight"), String::new()];

    match &state.snapshot {
        FetchSlot::Ready(view) => lines.extend(snapshot::table_lines(view)),
        FetchSlot::Loading => lines.push(String::from("Loading market data...")),
    }
    lines.push(String::new());

    match &state.history {
        FetchSlot::Ready(view) => lines.extend(history::table_lines(view)),
        FetchSlot::Loading => lines.push(String::from("Loading historical data...")),
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use intermarket_core::{compose_history, FetchSlot};

    #[test]
    fn loading_slots_render_placeholders() {
        let state = DashboardState::default();

        let text = table_lines(&state).join("\n");

        assert!(text.contains("Loading market data..."));
        assert!(text.contains("Loading historical data..."));
    }

    #[test]
    fn ready_slot_renders_next_to_loading_one() {
        let state = DashboardState {
            snapshot: FetchSlot::Loading,
            history: FetchSlot::Ready(compose_history(Vec::new())),
        };

        let text = table_lines(&state).join("\n");

        assert!(text.contains("Loading market data..."));
        assert!(text.contains("No historical data yet."));
    }
}

use intermarket_core::{compose_snapshot, DashboardClient, SnapshotView, MARKET_DATA_PATH};

use crate::error::CliError;

use super::Report;

pub async fn run(client: &DashboardClient) -> Result<Report, CliError> {
    let payload = client.market_data().await?;
    let view = compose_snapshot(&payload);

    let data = serde_json::to_value(&view)?;
    Ok(Report::new(MARKET_DATA_PATH, data, table_lines(&view)))
}

pub(super) fn table_lines(view: &SnapshotView) -> Vec<String> {
    let mut lines = vec![format!(
        "Market Sentiment: {} [{}]",
        view.sentiment_text, view.sentiment_tone
    )];

    match view.score {
        Some(score) => lines.push(format!("Score: {score:.2}")),
        None => lines.push(String::from("Score: --")),
    }
    lines.push(String::new());

    lines.push(String::from("Latest Prices"));
    if view.entries.is_empty() {
        lines.push(String::from("  (no data yet)"));
    }
    for entry in &view.entries {
        lines.push(format!("  {:<12} {:>12}", entry.symbol, entry.formatted_price));
    }

    lines
}

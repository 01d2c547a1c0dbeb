use intermarket_core::{compose_history, DashboardClient, HistorySeries, HistoryView, HISTORY_PATH};

use crate::error::CliError;

use super::Report;

pub async fn run(client: &DashboardClient) -> Result<Report, CliError> {
    let rows = client.history().await?;
    let view = compose_history(rows);

    let data = serde_json::to_value(&view)?;
    Ok(Report::new(HISTORY_PATH, data, table_lines(&view)))
}

pub(super) fn table_lines(view: &HistoryView) -> Vec<String> {
    let mut lines = vec![String::from("Historical Market Trends")];

    if view.is_empty() {
        lines.push(String::from("  No historical data yet."));
        return lines;
    }

    let first = &view.points[0].date;
    let last = &view.points[view.len() - 1].date;
    lines.push(format!("  {} points ({first} .. {last})", view.len()));
    lines.push(String::new());

    for series in HistorySeries::ALL {
        let points = view.series(series);
        match points.last() {
            Some(point) => lines.push(format!(
                "  {:<16} {:>5} pts   last {:>10.2}   {}",
                series.key(),
                points.len(),
                point.value,
                series.color()
            )),
            None => lines.push(format!("  {:<16}    no data", series.key())),
        }
    }

    lines
}

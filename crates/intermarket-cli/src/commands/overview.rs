use intermarket_core::{
    compose, ChangeTile, DashboardClient, DisplayCard, MacroIndicator, OverviewViewModel,
    SectionState, OVERVIEW_PATH,
};

use crate::error::CliError;

use super::Report;

pub async fn run(client: &DashboardClient) -> Result<Report, CliError> {
    let payload = client.overview().await?;
    let model = compose(&payload);

    let data = serde_json::to_value(&model)?;
    Ok(Report::new(OVERVIEW_PATH, data, table_lines(&model)))
}

fn table_lines(model: &OverviewViewModel) -> Vec<String> {
    let mut lines = vec![String::from("Market Overview"), String::new()];

    match &model.sentiment {
        SectionState::Ready(sentiment) => {
            lines.push(format!(
                "Sentiment: {} (score {:.2})",
                sentiment.label, sentiment.score
            ));
            lines.push(format!("Equity trend: {}", sentiment.equity_trend));
            if !sentiment.drivers.is_empty() {
                lines.push(format!("Drivers: {}", sentiment.drivers.join(", ")));
            }
        }
        SectionState::NoData => lines.push(String::from("Sentiment: no data")),
    }
    lines.push(String::new());

    match &model.narrative {
        SectionState::Ready(text) => lines.push(format!("● {text}")),
        SectionState::NoData => lines.push(String::from("● no narrative yet")),
    }
    lines.push(String::new());

    lines.push(String::from("Markets"));
    if model.cards.is_empty() {
        lines.push(String::from("  (no market data yet)"));
    }
    for card in &model.cards {
        lines.push(card_line(card));
    }
    lines.push(String::new());

    lines.push(String::from("Yield Curve"));
    match &model.yield_curve {
        SectionState::Ready(curve) => {
            lines.push(format!("  10Y: {:.2}%", curve.ten_year));
            lines.push(format!("  2s–10s: {:.1} bps", curve.slope_bps));
            lines.push(format!("  {}", curve.slope_label));
        }
        SectionState::NoData => lines.push(String::from("  no data")),
    }
    lines.push(String::new());

    lines.push(String::from("Macro Snapshot"));
    match &model.macro_chips {
        SectionState::Ready(chips) => {
            lines.push(chip_line(&chips.cpi));
            lines.push(chip_line(&chips.unemployment));
            lines.push(chip_line(&chips.policy_rate));
        }
        SectionState::NoData => lines.push(String::from("  no data")),
    }
    lines.push(String::new());

    lines.push(String::from("Regions"));
    push_tiles(&mut lines, &model.regions);
    lines.push(String::new());

    lines.push(String::from("Sectors"));
    push_tiles(&mut lines, &model.sectors);

    if let Some(last_updated) = &model.last_updated {
        lines.push(String::new());
        lines.push(format!("last updated: {last_updated}"));
    }

    lines
}

fn card_line(card: &DisplayCard) -> String {
    if card.state.is_missing() {
        return format!("  {} {:<24} {:>12}   no data", card.direction.glyph(), card.name, "--");
    }

    format!(
        "  {} {:<24} {:>12} {:>8.2}%",
        card.direction.glyph(),
        card.name,
        card.formatted_price,
        card.change_pct
    )
}

fn chip_line(chip: &MacroIndicator) -> String {
    if chip.state.is_missing() {
        return format!("  {}: no data", chip.label);
    }

    format!("  {}: {:.2} {}", chip.label, chip.value, chip.direction.glyph())
}

fn push_tiles(lines: &mut Vec<String>, tiles: &[ChangeTile]) {
    if tiles.is_empty() {
        lines.push(String::from("  (no data yet)"));
        return;
    }

    for tile in tiles {
        if tile.state.is_missing() {
            lines.push(format!("  {} {:<20}   no data", tile.direction.glyph(), tile.label));
        } else {
            lines.push(format!(
                "  {} {:<20} {:>7.2}%",
                tile.direction.glyph(),
                tile.label,
                tile.change_1m
            ));
        }
    }
}

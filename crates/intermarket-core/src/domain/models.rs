use serde::{Deserialize, Serialize};

use crate::{MacroDirection, TrendDirection};

/// Whether a display entity carries live data or a degraded placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataState {
    Live,
    Missing,
}

impl DataState {
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Availability of an optional payload section in the composed model.
///
/// A malformed or absent section degrades to `NoData` while its siblings
/// compose normally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum SectionState<T> {
    Ready(T),
    NoData,
}

impl<T> SectionState<T> {
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::NoData => None,
        }
    }
}

/// Plot coordinate produced by the sparkline projector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Display-ready market card derived from one raw market record.
///
/// `price` stays unrounded for downstream computation; `formatted_price`
/// is the grouped two-decimal display string. `change_pct` is likewise
/// unrounded, percent formatting belongs to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayCard {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub formatted_price: String,
    pub change_pct: f64,
    pub direction: TrendDirection,
    pub sparkline_points: Vec<PlotPoint>,
    pub change_1w: Option<f64>,
    pub change_1m: Option<f64>,
    pub change_1y: Option<f64>,
    pub state: DataState,
}

impl DisplayCard {
    /// Degraded stand-in for a record that failed validation. Sibling
    /// cards render on; this one shows its label and a no-data marker.
    pub fn placeholder(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price: 0.0,
            formatted_price: String::from("--"),
            change_pct: 0.0,
            direction: TrendDirection::Flat,
            sparkline_points: Vec::new(),
            change_1w: None,
            change_1m: None,
            change_1y: None,
            state: DataState::Missing,
        }
    }
}

/// One-month change tile for a region or sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeTile {
    pub label: String,
    pub symbol: String,
    pub change_1m: f64,
    pub direction: TrendDirection,
    pub state: DataState,
}

impl ChangeTile {
    pub fn placeholder(label: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            symbol: symbol.into(),
            change_1m: 0.0,
            direction: TrendDirection::Flat,
            state: DataState::Missing,
        }
    }
}

/// Macro reading with an upstream-labeled direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroIndicator {
    pub label: String,
    pub value: f64,
    pub previous: Option<f64>,
    pub direction: MacroDirection,
    pub state: DataState,
}

impl MacroIndicator {
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: 0.0,
            previous: None,
            direction: MacroDirection::Flat,
            state: DataState::Missing,
        }
    }
}

/// The three macro chips rendered together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroSnapshot {
    pub cpi: MacroIndicator,
    pub unemployment: MacroIndicator,
    pub policy_rate: MacroIndicator,
}

/// 2s/10s yield curve panel contents. All three fields pass through
/// together; none is silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldSummary {
    pub ten_year: f64,
    pub slope_bps: f64,
    pub slope_label: String,
}

/// Backend-computed market mood with its top drivers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentBlock {
    pub label: String,
    pub score: f64,
    pub equity_trend: String,
    pub drivers: Vec<String>,
}

/// Fully derived overview page model.
///
/// Rebuilt whole from the latest payload on every refresh; sequence order
/// is exactly the payload order, and nothing is mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewViewModel {
    pub sentiment: SectionState<SentimentBlock>,
    pub narrative: SectionState<String>,
    pub cards: Vec<DisplayCard>,
    pub regions: Vec<ChangeTile>,
    pub sectors: Vec<ChangeTile>,
    pub macro_chips: SectionState<MacroSnapshot>,
    pub yield_curve: SectionState<YieldSummary>,
    pub last_updated: Option<String>,
}

/// Format a price to two decimals with thousands grouping ("4,500.50").
pub fn format_grouped_price(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped_price(4500.5), "4,500.50");
        assert_eq!(format_grouped_price(1_234_567.891), "1,234,567.89");
        assert_eq!(format_grouped_price(999.994), "999.99");
        assert_eq!(format_grouped_price(0.0), "0.00");
    }

    #[test]
    fn groups_negative_prices() {
        assert_eq!(format_grouped_price(-12345.6), "-12,345.60");
    }

    #[test]
    fn placeholder_card_is_flat_and_marked() {
        let card = DisplayCard::placeholder("gold", "Gold");
        assert_eq!(card.direction, TrendDirection::Flat);
        assert_eq!(card.formatted_price, "--");
        assert!(card.sparkline_points.is_empty());
        assert!(card.state.is_missing());
    }

    #[test]
    fn section_state_accessors() {
        let ready = SectionState::Ready(3_u8);
        assert!(ready.is_ready());
        assert_eq!(ready.as_ready(), Some(&3));

        let gone: SectionState<u8> = SectionState::NoData;
        assert!(!gone.is_ready());
        assert_eq!(gone.as_ready(), None);
    }
}

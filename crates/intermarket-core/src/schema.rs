//! Wire-format decode types for the dashboard backend endpoints.
//!
//! The backend sanitizes NaN/inf to JSON null before responding, so every
//! numeric field that can degrade decodes as `Option<f64>`. Decoding is
//! deliberately lenient; validation happens during derivation so that one
//! bad field degrades one display entity instead of failing the payload.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// `/api/market-data` response: mood label, score, and the latest price
/// per symbol in payload order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketDataResponse {
    pub sentiment: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub latest: IndexMap<String, Option<f64>>,
}

/// One `/api/history` row of daily closes.
///
/// `ten_year_yield` also accepts the backend's legacy `10yr_yield`
/// spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub date: String,
    #[serde(default)]
    pub sp500: Option<f64>,
    #[serde(default)]
    pub nasdaq: Option<f64>,
    #[serde(default)]
    pub gold: Option<f64>,
    #[serde(default)]
    pub oil: Option<f64>,
    #[serde(default)]
    pub usd_index: Option<f64>,
    #[serde(default, alias = "10yr_yield")]
    pub ten_year_yield: Option<f64>,
}

/// `/api/overview` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverviewResponse {
    #[serde(default)]
    pub sentiment: Option<RawSentiment>,
    #[serde(default)]
    pub narrative: Option<String>,
    #[serde(default)]
    pub market_cards: Vec<RawMarketCard>,
    #[serde(default)]
    pub regions: Vec<RawRegionTile>,
    #[serde(default)]
    pub sectors: Vec<RawSectorTile>,
    #[serde(default, rename = "macro")]
    pub macro_section: Option<RawMacroSection>,
    #[serde(default, rename = "yield")]
    pub yield_panel: Option<RawYieldPanel>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSentiment {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub equity_trend: Option<String>,
    #[serde(default)]
    pub drivers: Vec<String>,
}

/// Raw market record behind one display card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMarketCard {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub change_1d: Option<f64>,
    #[serde(default)]
    pub change_1w: Option<f64>,
    #[serde(default)]
    pub change_1m: Option<f64>,
    #[serde(default)]
    pub change_1y: Option<f64>,
    #[serde(default)]
    pub sparkline: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRegionTile {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub change_1m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSectorTile {
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub change_1m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMacroSection {
    #[serde(default)]
    pub cpi: Option<RawMacroReading>,
    #[serde(default)]
    pub unemployment: Option<RawMacroReading>,
    #[serde(default)]
    pub policy_rate: Option<RawMacroReading>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMacroReading {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub prev: Option<f64>,
    #[serde(default)]
    pub direction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawYieldPanel {
    #[serde(default)]
    pub ten_year: Option<f64>,
    #[serde(default)]
    pub two_ten_slope_bps: Option<f64>,
    #[serde(default)]
    pub slope_label: Option<String>,
}

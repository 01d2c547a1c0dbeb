use serde::Serialize;

use crate::schema::MarketDataResponse;
use crate::view::optional_finite;
use crate::{DataState, Tone};

/// Derived model for the live snapshot strip: mood header plus the latest
/// price grid in payload order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotView {
    pub sentiment: String,
    pub sentiment_text: String,
    pub sentiment_tone: Tone,
    pub score: Option<f64>,
    pub entries: Vec<SnapshotEntry>,
}

/// One cell of the latest-price grid. Prices here are plain two-decimal
/// strings; grouping belongs to the overview cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotEntry {
    pub symbol: String,
    pub price: f64,
    pub formatted_price: String,
    pub state: DataState,
}

impl SnapshotEntry {
    pub fn placeholder(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: 0.0,
            formatted_price: String::from("--"),
            state: DataState::Missing,
        }
    }
}

/// Derive the snapshot view from the `/api/market-data` payload.
///
/// `"bullish"` renders green; every other mood label renders red, which
/// is exactly how the source header treats it.
pub fn compose_snapshot(payload: &MarketDataResponse) -> SnapshotView {
    let entries = payload
        .latest
        .iter()
        .map(|(symbol, value)| match value {
            Some(price) if price.is_finite() => SnapshotEntry {
                symbol: symbol.clone(),
                price: *price,
                formatted_price: format!("{price:.2}"),
                state: DataState::Live,
            },
            _ => SnapshotEntry::placeholder(symbol.clone()),
        })
        .collect();

    SnapshotView {
        sentiment: payload.sentiment.clone(),
        sentiment_text: payload.sentiment.to_uppercase(),
        sentiment_tone: mood_tone(&payload.sentiment),
        score: optional_finite(payload.score),
        entries,
    }
}

fn mood_tone(sentiment: &str) -> Tone {
    if sentiment == "bullish" {
        Tone::Green
    } else {
        Tone::Red
    }
}

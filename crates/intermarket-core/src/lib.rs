//! Derivation core for the InterMarket dashboard.
//!
//! This crate contains:
//! - Wire schemas for the backend endpoints
//! - Display-ready view-model types
//! - Pure derivation functions (trend, cards, sparkline, yield, compose)
//! - The HTTP transport seam and typed endpoint client
//! - Dual-slot fetch state for the rendering layer

pub mod client;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod schema;
pub mod state;
pub mod view;

pub use client::{ClientError, DashboardClient, HISTORY_PATH, MARKET_DATA_PATH, OVERVIEW_PATH};
pub use domain::{
    format_grouped_price, ChangeTile, DataState, DisplayCard, MacroDirection, MacroIndicator,
    MacroSnapshot, OverviewViewModel, PlotPoint, SectionState, SentimentBlock, Tone,
    TrendDirection, YieldSummary,
};
pub use error::ValidationError;
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};
pub use state::{
    fetch_history_slot, fetch_snapshot_slot, load_dashboard, DashboardState, FetchSlot,
};
pub use view::compose::{compose, compose_with_geometry};
pub use view::history::{compose_history, HistorySeries, HistoryView, SeriesPoint};
pub use view::normalize::normalize;
pub use view::snapshot::{compose_snapshot, SnapshotEntry, SnapshotView};
pub use view::sparkline::{project, SparklineGeometry};
pub use view::yield_curve::summarize;

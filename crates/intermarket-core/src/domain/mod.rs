//! Display-ready value records for the dashboard.
//!
//! Every type here is an immutable snapshot derived from one payload and
//! discarded on the next fetch. Presentation (glyph, tone) hangs off the
//! direction enums so color and arrow can never disagree.

mod models;
mod trend;

pub use models::{
    format_grouped_price, ChangeTile, DataState, DisplayCard, MacroIndicator, MacroSnapshot,
    OverviewViewModel, PlotPoint, SectionState, SentimentBlock, YieldSummary,
};
pub use trend::{MacroDirection, Tone, TrendDirection};

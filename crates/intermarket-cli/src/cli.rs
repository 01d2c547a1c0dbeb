//! CLI argument definitions for the InterMarket dashboard.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `overview` | Full overview page model |
//! | `snapshot` | Live sentiment + latest prices |
//! | `history` | Historical series summary |
//! | `dashboard` | Both independent slices in one shot |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | `http://127.0.0.1:8000` | Backend base URL |
//! | `--timeout-ms` | `3000` | Request timeout in ms |

use clap::{Parser, Subcommand, ValueEnum};

/// InterMarket Insight - cross-asset market dashboard.
///
/// Fetches snapshot, history, and overview payloads from the backend API
/// and renders the derived view models in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "intermarket",
    author,
    version,
    about = "Cross-asset market dashboard CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Base URL of the dashboard backend.
    #[arg(long, global = true, default_value = "http://127.0.0.1:8000")]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII panels for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the full market overview: sentiment, narrative, market
    /// cards, yield curve, macro chips, regions, and sectors.
    Overview,

    /// Render the live snapshot (market mood plus latest prices).
    Snapshot,

    /// Render the historical series summary.
    History,

    /// Fetch snapshot and history independently and render both slots;
    /// a failed slice shows its loading placeholder instead of aborting.
    Dashboard,
}

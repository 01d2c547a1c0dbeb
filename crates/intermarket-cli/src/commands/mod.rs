mod dashboard;
mod history;
mod overview;
mod snapshot;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use intermarket_core::{DashboardClient, ReqwestHttpClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Result of one command: machine payload plus rendered table lines.
pub struct Report {
    pub meta: ReportMeta,
    pub data: Value,
    pub table: Vec<String>,
}

impl Report {
    fn new(endpoint: &'static str, data: Value, table: Vec<String>) -> Self {
        Self {
            meta: ReportMeta::new(endpoint),
            data,
            table,
        }
    }
}

/// Metadata attached to JSON output.
#[derive(Debug, Serialize)]
pub struct ReportMeta {
    pub request_id: String,
    pub endpoint: &'static str,
    pub generated_at: String,
}

impl ReportMeta {
    fn new(endpoint: &'static str) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            endpoint,
            generated_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
        }
    }
}

pub async fn run(cli: &Cli) -> Result<Report, CliError> {
    let client = DashboardClient::new(Arc::new(ReqwestHttpClient::new()), cli.base_url.clone())
        .with_timeout_ms(cli.timeout_ms);
    tracing::debug!(base_url = %cli.base_url, timeout_ms = cli.timeout_ms, "dashboard client ready");

    match cli.command {
        Command::Overview => overview::run(&client).await,
        Command::Snapshot => snapshot::run(&client).await,
        Command::History => history::run(&client).await,
        Command::Dashboard => dashboard::run(&client).await,
    }
}

//! Shared view state filled by two independent fetches.
//!
//! The snapshot and the historical series load through separate requests
//! with no ordering guarantee between them; either slice may arrive
//! first, and either may fail without touching the other.

use crate::client::{ClientError, DashboardClient};
use crate::view::history::{compose_history, HistoryView};
use crate::view::snapshot::{compose_snapshot, SnapshotView};

/// One independently loaded slice of dashboard state.
///
/// A failed fetch logs a diagnostic and leaves the slot `Loading`: the
/// slice keeps its loading placeholder indefinitely and is never retried
/// here.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchSlot<T> {
    Loading,
    Ready(T),
}

impl<T> FetchSlot<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading => None,
        }
    }
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// The two independent slices of the main page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub snapshot: FetchSlot<SnapshotView>,
    pub history: FetchSlot<HistoryView>,
}

pub async fn fetch_snapshot_slot(client: &DashboardClient) -> FetchSlot<SnapshotView> {
    slot(
        client
            .market_data()
            .await
            .map(|payload| compose_snapshot(&payload)),
        "market-data",
    )
}

pub async fn fetch_history_slot(client: &DashboardClient) -> FetchSlot<HistoryView> {
    slot(client.history().await.map(compose_history), "history")
}

/// Run both fetches concurrently and collect whatever arrived.
pub async fn load_dashboard(client: &DashboardClient) -> DashboardState {
    let (snapshot, history) =
        tokio::join!(fetch_snapshot_slot(client), fetch_history_slot(client));

    DashboardState { snapshot, history }
}

fn slot<T>(result: Result<T, ClientError>, endpoint: &'static str) -> FetchSlot<T> {
    match result {
        Ok(view) => FetchSlot::Ready(view),
        Err(error) => {
            tracing::error!(endpoint, %error, "fetch failed; slice stays in its loading state");
            FetchSlot::Loading
        }
    }
}

//! App state - pure data structure with no I/O logic

use std::sync::Arc;

use crate::messages::render::FetchStatus;
use crate::messages::ui_events::AppsTab;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState};
use crate::view;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Fetch
    pub status: FetchStatus,
    pub api_url: String,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    fetch_started: bool,

    // Table
    pub active_tab: AppsTab,
    pub selected_row: usize,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new(api_url: impl Into<String>) -> Self {
        AppState {
            status: FetchStatus::Loading,
            api_url: api_url.into(),
            next_request_id: 1,
            pending_request_id: None,
            fetch_started: false,
            active_tab: AppsTab::All,
            selected_row: 0,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Issue the fetch. Only the first call per run yields a command.
    pub fn begin_fetch(&mut self) -> Option<NetworkCommand> {
        if self.fetch_started {
            return None;
        }
        self.fetch_started = true;
        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.status = FetchStatus::Loading;
        Some(NetworkCommand::FetchLatest { id })
    }

    /// Apply a network response. Loading moves to Loaded or Failed once;
    /// stale or repeated responses are dropped.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) || self.status.is_terminal() {
            tracing::warn!(id = response.id(), "Ignoring unexpected response");
            return;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::Loaded { data, time_ms, .. } => {
                tracing::info!(apps = data.installed_apps.len(), time_ms, "Inventory loaded");
                self.status = FetchStatus::Loaded(Arc::new(data));
            }
            NetworkResponse::Failed { error, time_ms, .. } => {
                tracing::error!(kind = error.kind(), time_ms, %error, "Inventory fetch failed");
                self.status = FetchStatus::Failed(error);
            }
        }
        self.selected_row = 0;
    }

    /// Rows in the active tab's table, zero while loading or when the tab
    /// shows its empty state
    pub fn row_count(&self) -> usize {
        let FetchStatus::Loaded(data) = &self.status else {
            return 0;
        };
        let apps = &data.installed_apps;
        match self.active_tab {
            AppsTab::All => apps.len(),
            AppsTab::Recent if view::has_recent_activity(apps) => view::recent_apps(apps).len(),
            AppsTab::Recent => 0,
            AppsTab::Deleted => view::deleted_apps(apps).len(),
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            status: self.status.clone(),
            active_tab: self.active_tab,
            selected_row: self.selected_row,
            show_help: self.show_help,
            api_url: self.api_url.clone(),
        }
    }
}

//! Render state - data structure sent from App layer to UI for rendering

use std::sync::Arc;

use crate::error::FetchError;
use crate::messages::ui_events::AppsTab;
use crate::models::ApiResponse;

/// Outcome of the one fetch made per run
#[derive(Debug, Clone, Default)]
pub enum FetchStatus {
    #[default]
    Loading,
    Loaded(Arc<ApiResponse>),
    Failed(FetchError),
}

impl FetchStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchStatus::Loading)
    }
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub status: FetchStatus,
    pub active_tab: AppsTab,
    pub selected_row: usize,
    pub show_help: bool,
    pub api_url: String,
}

impl Default for RenderState {
    fn default() -> Self {
        use crate::constants::DEFAULT_API_URL;
        RenderState {
            status: FetchStatus::Loading,
            active_tab: AppsTab::All,
            selected_row: 0,
            show_help: false,
            api_url: String::from(DEFAULT_API_URL),
        }
    }
}

//! Command handlers - methods on AppState for processing UI events

use crate::app::state::AppState;
use crate::messages::ui_events::AppsTab;

impl AppState {
    // ========================
    // Tab navigation
    // ========================

    pub fn switch_tab(&mut self, tab: AppsTab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.selected_row = 0;
        }
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(self.active_tab.prev());
    }

    // ========================
    // Row selection
    // ========================

    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let rows = self.row_count();
        if self.selected_row + 1 < rows {
            self.selected_row += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_row = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_row = self.row_count().saturating_sub(1);
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::NetworkResponse;
    use crate::models::{ApiResponse, InstalledApp};

    fn loaded_state(count: usize) -> AppState {
        let mut state = AppState::new("http://x");
        state.begin_fetch();
        state.handle_response(NetworkResponse::Loaded {
            id: 1,
            data: ApiResponse {
                installed_apps: vec![InstalledApp::default(); count],
                ..Default::default()
            },
            time_ms: 0,
        });
        state
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = loaded_state(3);
        state.select_prev();
        assert_eq!(state.selected_row, 0);

        for _ in 0..10 {
            state.select_next();
        }
        assert_eq!(state.selected_row, 2);

        state.select_first();
        assert_eq!(state.selected_row, 0);
        state.select_last();
        assert_eq!(state.selected_row, 2);
    }

    #[test]
    fn test_switching_tab_resets_selection() {
        let mut state = loaded_state(3);
        state.select_last();
        state.next_tab();
        assert_eq!(state.active_tab, AppsTab::Recent);
        assert_eq!(state.selected_row, 0);

        state.select_last();
        state.switch_tab(AppsTab::Recent);
        assert_eq!(state.selected_row, 0);
    }

    #[test]
    fn test_selection_while_loading() {
        let mut state = AppState::new("http://x");
        state.select_next();
        state.select_last();
        assert_eq!(state.selected_row, 0);
    }

    #[test]
    fn test_help_toggle() {
        let mut state = AppState::new("http://x");
        state.toggle_help();
        assert!(state.show_help);
        state.close_help();
        assert!(!state.show_help);
    }
}

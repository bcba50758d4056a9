//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        api_url: impl Into<String>,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(api_url),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        if let Some(cmd) = self.state.begin_fetch() {
            tracing::info!(url = %self.state.api_url, "Requesting latest inventory");
            let _ = self.network_tx.send(cmd);
        }

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Tabs
            UiEvent::SwitchTab(tab) => self.state.switch_tab(tab),
            UiEvent::NextTab => self.state.next_tab(),
            UiEvent::PrevTab => self.state.prev_tab(),

            // Rows
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectFirst => self.state.select_first(),
            UiEvent::SelectLast => self.state.select_last(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::render::FetchStatus;
    use crate::messages::ui_events::AppsTab;
    use crate::models::ApiResponse;

    #[tokio::test]
    async fn test_actor_fetches_once_and_shuts_down() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new("http://localhost:7070/api/latest_data", net_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));

        let initial = render_rx.recv().await.unwrap();
        assert!(matches!(initial.status, FetchStatus::Loading));

        let id = match net_cmd_rx.recv().await.unwrap() {
            NetworkCommand::FetchLatest { id } => id,
            other => panic!("unexpected command {other:?}"),
        };

        net_resp_tx
            .send(NetworkResponse::Loaded {
                id,
                data: ApiResponse::default(),
                time_ms: 1,
            })
            .unwrap();
        let after = render_rx.recv().await.unwrap();
        assert!(matches!(after.status, FetchStatus::Loaded(_)));

        ui_tx.send(UiEvent::SwitchTab(AppsTab::Deleted)).unwrap();
        let after = render_rx.recv().await.unwrap();
        assert_eq!(after.active_tab, AppsTab::Deleted);

        ui_tx.send(UiEvent::Quit).unwrap();
        assert!(matches!(
            net_cmd_rx.recv().await,
            Some(NetworkCommand::Shutdown)
        ));
        handle.await.unwrap();
    }
}

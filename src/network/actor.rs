//! Network actor - runs inventory fetches in Tokio async runtime

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_fetch};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    api_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        api_url: impl Into<String>,
        timeout: Duration,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            client: create_client(timeout),
            api_url: api_url.into(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchLatest { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let url = self.api_url.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, "Fetching latest data");
                                let result = execute_fetch(&client, &url, id).await;
                                tracing::info!(id, ok = matches!(result, NetworkResponse::Loaded { .. }), "Fetch completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            tracing::info!(in_flight = self.active_requests.len(), "Network actor shutting down");
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::network::client::tests::serve_once;

    #[tokio::test]
    async fn test_actor_reports_loaded() {
        let url = serve_once("200 OK", r#"{"installed_apps":[]}"#).await;
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(NetworkActor::new(url, Duration::from_secs(5), resp_tx).run(cmd_rx));
        cmd_tx.send(NetworkCommand::FetchLatest { id: 1 }).unwrap();

        match resp_rx.recv().await.unwrap() {
            NetworkResponse::Loaded { id, data, .. } => {
                assert_eq!(id, 1);
                assert!(data.installed_apps.is_empty());
            }
            other => panic!("unexpected response {other:?}"),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_actor_reports_connectivity_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}/api/latest_data", port);
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        tokio::spawn(NetworkActor::new(url, Duration::from_secs(5), resp_tx).run(cmd_rx));
        cmd_tx.send(NetworkCommand::FetchLatest { id: 3 }).unwrap();

        match resp_rx.recv().await.unwrap() {
            NetworkResponse::Failed { id, error, .. } => {
                assert_eq!(id, 3);
                assert!(matches!(error, FetchError::Connectivity { .. }));
            }
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_shutdown_aborts_in_flight_fetch() {
        // Accepts but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/api/latest_data", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let _conn = listener.accept().await;
            std::future::pending::<()>().await;
        });

        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(url, Duration::from_secs(30), resp_tx).run(cmd_rx));

        cmd_tx.send(NetworkCommand::FetchLatest { id: 1 }).unwrap();
        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();

        assert!(resp_rx.recv().await.is_none());
    }
}

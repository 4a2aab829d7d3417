//! Network actor - runs document fetches and invocations in the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_invocation, fetch_document};

/// Network actor that processes fetch and invoke commands
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop.
    ///
    /// Each command is spawned as an independent task; there is no
    /// cancellation - shutting down simply drops interest in whatever is
    /// still in flight.
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchDocument { id, url }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, "Fetching OpenAPI document");
                                let result = fetch_document(&client, &url, id).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Invoke { id, method, path, base_url, api_key }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, method = %method, path = %path, "Invoking endpoint");
                                let result = execute_invocation(
                                    &client,
                                    &method,
                                    &base_url,
                                    &path,
                                    &api_key,
                                    id,
                                ).await;
                                tracing::info!(id, "Invocation completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

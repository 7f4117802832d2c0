//! HTTP client for the health-check dashboard.
//!
//! [`DashboardClient`] issues the raw calls and reports typed errors.
//! [`Dashboard`] pairs it with a [`MessageDisplay`] and implements the
//! user-facing operations: every failure ends up on screen and the operation
//! simply returns `None`.

use crate::config::ServerConfig;
use crate::endpoints::{endpoint_url, DashboardAction, StatusStream};
use crate::error::DashboardError;
use crate::messages::MessageDisplay;
use crate::stream::{LineBuffer, StreamEvent};
use futures_util::{Stream, StreamExt};
use std::time::Duration;

/// Thin wrapper around a pooled reqwest client bound to one dashboard.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    /// Create a client for the configured dashboard.
    pub fn new(config: &ServerConfig) -> Result<Self, DashboardError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self::with_client(&config.base_url, http))
    }

    /// Create a client around an existing reqwest client.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }

    /// Send one GET for `action` and return the body of a 2xx response.
    ///
    /// The body is read before the status is classified, so failures carry it.
    pub async fn execute(&self, action: DashboardAction) -> Result<String, DashboardError> {
        let url = self.url(action.path());
        tracing::debug!(%action, %url, "Sending dashboard request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DashboardError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// Follow one of the dashboard's newline-delimited status streams.
    ///
    /// A non-2xx response yields a single `Status` error and ends the stream.
    /// Unknown control lines are skipped.
    pub fn health_status_stream(
        &self,
        kind: StatusStream,
    ) -> impl Stream<Item = Result<StreamEvent, DashboardError>> + '_ {
        let url = self.url(kind.path());

        async_stream::try_stream! {
            tracing::debug!(%url, "Opening health status stream");
            let response = ensure_success(self.http.get(&url).send().await?).await?;

            let mut lines = LineBuffer::new();
            let mut chunks = std::pin::pin!(response.bytes_stream());
            while let Some(chunk) = chunks.next().await {
                let chunk = chunk?;
                for line in lines.push(&chunk) {
                    if let Some(event) = StreamEvent::parse(&line)? {
                        yield event;
                    }
                }
            }
            if let Some(line) = lines.finish() {
                if let Some(event) = StreamEvent::parse(&line)? {
                    yield event;
                }
            }
            tracing::debug!(%url, "Health status stream ended");
        }
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, DashboardError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(DashboardError::Status {
        status: status.as_u16(),
        body,
    })
}

/// The dashboard operations as a user sees them.
#[derive(Debug)]
pub struct Dashboard {
    client: DashboardClient,
    display: MessageDisplay,
}

impl Dashboard {
    pub fn new(client: DashboardClient, display: MessageDisplay) -> Self {
        Self { client, display }
    }

    pub fn display_mut(&mut self) -> &mut MessageDisplay {
        &mut self.display
    }

    /// Start the configuration preview. Clears displayed messages on success.
    pub async fn start_preview(&mut self) -> Option<String> {
        self.run(DashboardAction::StartPreview).await
    }

    /// Stop the configuration preview.
    pub async fn stop_preview(&mut self) -> Option<String> {
        self.run(DashboardAction::StopPreview).await
    }

    /// Reload the dashboard's health-check configuration.
    pub async fn reload_dashboard(&mut self) -> Option<String> {
        self.run(DashboardAction::Reload).await
    }

    /// Run `action`, returning the response body or displaying the failure.
    pub async fn run(&mut self, action: DashboardAction) -> Option<String> {
        match self.client.execute(action).await {
            Ok(body) => {
                tracing::debug!(%action, "Dashboard action succeeded");
                if action.clears_messages() {
                    self.display.clear();
                }
                Some(body)
            }
            Err(e) => {
                tracing::warn!(%action, error = %e, "Dashboard action failed");
                self.display.show(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one error response whose body is shorter than its Content-Length.
    async fn truncated_error_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 1024];
                let _ = socket.read(&mut request).await;
                let _ = socket
                    .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\nshort")
                    .await;
            }
        });
        format!("http://{}", addr)
    }

    fn test_config(base_url: &str) -> ServerConfig {
        ServerConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
        }
    }

    #[test]
    fn test_client_builds_action_urls() {
        let client = DashboardClient::new(&test_config("http://dash.local:9080/")).unwrap();
        assert_eq!(
            client.url(DashboardAction::StartPreview.path()),
            "http://dash.local:9080/healthcheck/config/preview/start"
        );
    }

    #[test]
    fn test_client_keeps_base_url() {
        let client = DashboardClient::with_client("http://dash.local", reqwest::Client::new());
        assert_eq!(client.base_url(), "http://dash.local");
    }

    #[tokio::test]
    async fn test_unreadable_error_body_is_transport_error() {
        let base_url = truncated_error_server().await;
        let client = DashboardClient::new(&test_config(&base_url)).unwrap();

        let err = client.execute(DashboardAction::Reload).await.unwrap_err();
        assert!(matches!(err, DashboardError::Transport(_)));

        let mut stream = std::pin::pin!(client.health_status_stream(StatusStream::Published));
        let first = stream.next().await.unwrap();
        assert!(matches!(first, Err(DashboardError::Transport(_))));
        assert!(stream.next().await.is_none());
    }
}

//! Shared helpers for hcdash integration tests.

#![allow(dead_code)]

use hcdash::client::{Dashboard, DashboardClient};
use hcdash::messages::{MemoryPanel, MessageDisplay, RecordingAlert};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const HEARTBEAT_LINE: &str = r#"[["healthcheck","healthcheck"],["2024-05-01T10:00:10.000000",["2024-05-01T10:00:00.000000","2024-05-01T10:00:00.010000","green","Tested by other service check.",false]]]"#;

pub const GREEN_LINE: &str = r#"[["web","home"],["2024-05-01T10:00:30.000000",["2024-05-01T10:00:00.000000","2024-05-01T10:00:00.250000","green","OK",false]]]"#;

pub const RED_LINE: &str = r#"[["db","main"],["2024-05-01T10:01:00.000000",["2024-05-01T10:00:00.000000","2024-05-01T10:00:01.000000","red","connection refused",true]]]"#;

pub const PENDING_LINE: &str = r#"[["web","api"],null]"#;

pub const RELOAD_LINE: &str = r#""reload""#;

pub const CHECK_STARTED_LINE: &str = r#""continuouscheck_started""#;

/// Join lines the way the dashboard streams them.
pub fn ndjson(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

pub fn client_for(server: &MockServer) -> DashboardClient {
    DashboardClient::with_client(server.uri(), reqwest::Client::new())
}

/// Dashboard whose messages land in an inspectable in-memory panel.
pub fn dashboard_with_panel(server: &MockServer) -> (Dashboard, MemoryPanel) {
    let panel = MemoryPanel::new();
    let display = MessageDisplay::with_panel(panel.clone());
    (Dashboard::new(client_for(server), display), panel)
}

/// Dashboard without a panel, recording the alerts it raises.
pub fn dashboard_with_alert(server: &MockServer) -> (Dashboard, RecordingAlert) {
    let alert = RecordingAlert::new();
    let display = MessageDisplay::alert_only(alert.clone());
    (Dashboard::new(client_for(server), display), alert)
}

/// Mount a GET responder on `endpoint`.
pub async fn mount_text(server: &MockServer, endpoint: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

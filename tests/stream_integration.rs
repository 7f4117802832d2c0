//! Integration tests for the health status streams.

mod common;

use common::{
    client_for, ndjson, CHECK_STARTED_LINE, GREEN_LINE, HEARTBEAT_LINE, PENDING_LINE, RED_LINE,
    RELOAD_LINE,
};
use futures_util::StreamExt;
use hcdash::endpoints::StatusStream;
use hcdash::stream::{collect_snapshot, HealthLevel, StreamEvent};
use hcdash::DashboardError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_stream(server: &MockServer, kind: StatusStream, body: String) {
    Mock::given(method("GET"))
        .and(path(kind.path()))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/plain")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_snapshot_of_published_stream() {
    let server = MockServer::start().await;
    let body = ndjson(&[GREEN_LINE, RED_LINE, PENDING_LINE, HEARTBEAT_LINE, GREEN_LINE]);
    mount_stream(&server, StatusStream::Published, body).await;

    let client = client_for(&server);
    let snapshot = collect_snapshot(client.health_status_stream(StatusStream::Published))
        .await
        .unwrap();

    assert_eq!(snapshot.services.len(), 3);
    assert_eq!(snapshot.services[0].key(), ("web", "home"));
    assert_eq!(snapshot.services[1].level(), Some(HealthLevel::Red));
    assert!(snapshot.services[2].status.is_none());
    assert_eq!(snapshot.unhealthy_count(), 1);

    let heartbeat = snapshot.heartbeat.unwrap();
    assert!(heartbeat.is_heartbeat());
    assert_eq!(heartbeat.level(), Some(HealthLevel::Green));
}

#[tokio::test]
async fn test_preview_stream_uses_its_own_endpoint() {
    let server = MockServer::start().await;
    mount_stream(&server, StatusStream::Preview, ndjson(&[PENDING_LINE])).await;

    let client = client_for(&server);
    let updates: Vec<_> = client
        .health_status_stream(StatusStream::Preview)
        .collect()
        .await;

    assert_eq!(updates.len(), 1);
    let update = updates[0].as_ref().unwrap().as_status().unwrap();
    assert_eq!(update.key(), ("web", "api"));
}

#[tokio::test]
async fn test_stream_without_trailing_newline() {
    let server = MockServer::start().await;
    let body = format!("{}\n{}", GREEN_LINE, RED_LINE);
    mount_stream(&server, StatusStream::Published, body).await;

    let client = client_for(&server);
    let updates: Vec<_> = client
        .health_status_stream(StatusStream::Published)
        .collect()
        .await;

    assert_eq!(updates.len(), 2);
    let update = updates[1].as_ref().unwrap().as_status().unwrap();
    assert_eq!(update.level(), Some(HealthLevel::Red));
}

#[tokio::test]
async fn test_stream_rejected_by_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(StatusStream::Preview.path()))
        .respond_with(ResponseTemplate::new(403).set_body_string("Not Authorized"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = collect_snapshot(client.health_status_stream(StatusStream::Preview)).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "403 : Not Authorized");
}

#[tokio::test]
async fn test_malformed_line_ends_stream_with_parse_error() {
    let server = MockServer::start().await;
    let body = ndjson(&[GREEN_LINE, "{not json", RED_LINE]);
    mount_stream(&server, StatusStream::Published, body).await;

    let client = client_for(&server);
    let updates: Vec<_> = client
        .health_status_stream(StatusStream::Published)
        .collect()
        .await;

    assert_eq!(updates.len(), 2);
    assert!(updates[0].is_ok());
    assert!(matches!(updates[1], Err(DashboardError::Parse(_))));
}

#[tokio::test]
async fn test_control_lines_do_not_end_stream() {
    let server = MockServer::start().await;
    let body = ndjson(&[
        GREEN_LINE,
        HEARTBEAT_LINE,
        RELOAD_LINE,
        CHECK_STARTED_LINE,
        r#""continuouscheck_stopped""#,
        r#""not_a_known_event""#,
        GREEN_LINE,
    ]);
    mount_stream(&server, StatusStream::Published, body).await;

    let client = client_for(&server);
    let events: Vec<_> = client
        .health_status_stream(StatusStream::Published)
        .collect()
        .await;

    let events: Vec<StreamEvent> = events.into_iter().map(Result::unwrap).collect();
    assert_eq!(events.len(), 6);
    assert!(events[1].as_status().unwrap().is_heartbeat());
    assert_eq!(events[2], StreamEvent::Reload);
    assert_eq!(events[3], StreamEvent::ContinuousCheckStarted);
    assert_eq!(events[4], StreamEvent::ContinuousCheckStopped);
    assert_eq!(events[5].as_status().unwrap().key(), ("web", "home"));
}

#[tokio::test]
async fn test_snapshot_skips_control_lines() {
    let server = MockServer::start().await;
    let body = ndjson(&[CHECK_STARTED_LINE, GREEN_LINE, RELOAD_LINE, RED_LINE, HEARTBEAT_LINE]);
    mount_stream(&server, StatusStream::Preview, body).await;

    let client = client_for(&server);
    let snapshot = collect_snapshot(client.health_status_stream(StatusStream::Preview))
        .await
        .unwrap();

    assert_eq!(snapshot.services.len(), 2);
    assert_eq!(snapshot.unhealthy_count(), 1);
    assert!(snapshot.heartbeat.is_some());
}

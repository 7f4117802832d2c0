//! Status and watch command implementation

use crate::cli::output::{format_event_line, format_snapshot_json, format_snapshot_table};
use crate::cli::{stream_kind, StatusArgs, WatchArgs};
use crate::client::DashboardClient;
use crate::config::DashboardConfig;
use crate::stream::collect_snapshot;
use futures_util::StreamExt;
use std::io::Write;

/// Handle `hcdash status`
///
/// Reads the stream up to the dashboard's first heartbeat and renders what
/// it has seen by then.
pub async fn handle_status(
    args: &StatusArgs,
    config: &DashboardConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let client = DashboardClient::new(&config.server)?;
    let snapshot = collect_snapshot(client.health_status_stream(stream_kind(args.preview))).await?;

    if args.json {
        Ok(format_snapshot_json(&snapshot)?)
    } else {
        Ok(format_snapshot_table(&snapshot))
    }
}

/// Handle `hcdash watch`
///
/// Writes one line per event until the stream ends, `--limit` is reached or
/// Ctrl-C is pressed. Control events such as a configuration reload count
/// towards the limit. Returns the number of lines written.
pub async fn handle_watch<W: Write>(
    args: &WatchArgs,
    config: &DashboardConfig,
    out: &mut W,
) -> Result<usize, Box<dyn std::error::Error>> {
    let client = DashboardClient::new(&config.server)?;
    let mut events = std::pin::pin!(client.health_status_stream(stream_kind(args.preview)));
    let mut shutdown = std::pin::pin!(tokio::signal::ctrl_c());
    let mut written = 0;

    loop {
        if args.limit.is_some_and(|limit| written >= limit) {
            break;
        }

        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Interrupted, stopping watch");
                break;
            }
            next = events.next() => match next {
                Some(event) => {
                    let event = event?;
                    writeln!(out, "{}", format_event_line(&event))?;
                    out.flush()?;
                    written += 1;
                }
                None => break,
            },
        }
    }

    tracing::debug!(lines = written, "Watch finished");
    Ok(written)
}

//! Health status stream parsing.
//!
//! The dashboard pushes one JSON array per line:
//!
//! ```text
//! [["web","home"],["2024-05-01T10:00:30.000000",["2024-05-01T10:00:00.000000","2024-05-01T10:00:00.250000","green","OK",false]]]
//! ```
//!
//! The first element names the service, the second carries the next scheduled
//! check and the outcome of the last one. Either part of the status may be
//! `null` for services that have not been checked yet.
//!
//! Between status lines the dashboard also sends bare JSON strings announcing
//! state changes, e.g. `"reload"` after its configuration was reloaded. These
//! are read as [`StreamEvent`] control variants.

mod lines;

pub use lines::LineBuffer;

use crate::error::DashboardError;
use chrono::NaiveDateTime;
use futures_util::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Section/service pair the dashboard uses for its own self-check.
pub const HEARTBEAT_ID: &str = "healthcheck";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Result level of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLevel {
    Green,
    Yellow,
    Red,
    Error,
    #[serde(other)]
    Unknown,
}

impl HealthLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthLevel::Green => "green",
            HealthLevel::Yellow => "yellow",
            HealthLevel::Red => "red",
            HealthLevel::Error => "error",
            HealthLevel::Unknown => "unknown",
        }
    }

    pub fn is_healthy(self) -> bool {
        self == HealthLevel::Green
    }
}

impl fmt::Display for HealthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the most recent check of a service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub started: NaiveDateTime,
    pub ended: NaiveDateTime,
    pub level: HealthLevel,
    pub message: String,
    /// Whether the dashboard kept the full response for this check
    pub details_persisted: bool,
}

/// Scheduling and result state of one service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceStatus {
    pub next_check: Option<NaiveDateTime>,
    pub last_check: Option<CheckOutcome>,
}

/// One line of the status stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthStatusUpdate {
    pub section: String,
    pub service: String,
    pub status: Option<ServiceStatus>,
}

#[derive(Deserialize)]
struct RawUpdate((String, String), Option<RawStatus>);

#[derive(Deserialize)]
struct RawStatus(Option<String>, Option<RawOutcome>);

#[derive(Deserialize)]
struct RawOutcome(String, String, HealthLevel, String, bool);

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, DashboardError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|e| DashboardError::Parse(format!("invalid timestamp '{}': {}", value, e)))
}

impl HealthStatusUpdate {
    /// Parse a single stream line.
    pub fn parse(line: &str) -> Result<Self, DashboardError> {
        let RawUpdate((section, service), status) =
            serde_json::from_str(line).map_err(|e| DashboardError::Parse(e.to_string()))?;

        let status = match status {
            None => None,
            Some(RawStatus(next_check, outcome)) => {
                let next_check = next_check.as_deref().map(parse_timestamp).transpose()?;
                let last_check = match outcome {
                    None => None,
                    Some(RawOutcome(started, ended, level, message, details_persisted)) => {
                        Some(CheckOutcome {
                            started: parse_timestamp(&started)?,
                            ended: parse_timestamp(&ended)?,
                            level,
                            message,
                            details_persisted,
                        })
                    }
                };
                Some(ServiceStatus {
                    next_check,
                    last_check,
                })
            }
        };

        Ok(Self {
            section,
            service,
            status,
        })
    }

    /// Whether this line is the dashboard's own heartbeat rather than a service.
    pub fn is_heartbeat(&self) -> bool {
        self.section == HEARTBEAT_ID && self.service == HEARTBEAT_ID
    }

    pub fn key(&self) -> (&str, &str) {
        (&self.section, &self.service)
    }

    pub fn last_check(&self) -> Option<&CheckOutcome> {
        self.status.as_ref().and_then(|s| s.last_check.as_ref())
    }

    pub fn next_check(&self) -> Option<NaiveDateTime> {
        self.status.as_ref().and_then(|s| s.next_check)
    }

    pub fn level(&self) -> Option<HealthLevel> {
        self.last_check().map(|c| c.level)
    }
}

/// One line of a status stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    Status(HealthStatusUpdate),
    /// The dashboard reloaded its health-check configuration.
    Reload,
    ContinuousCheckStarted,
    ContinuousCheckStopped,
}

impl StreamEvent {
    /// Parse a single stream line.
    ///
    /// Control words this client does not know are skipped and yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, DashboardError> {
        if !line.trim_start().starts_with('"') {
            return HealthStatusUpdate::parse(line).map(|update| Some(StreamEvent::Status(update)));
        }

        let word: String =
            serde_json::from_str(line).map_err(|e| DashboardError::Parse(e.to_string()))?;
        match word.as_str() {
            "reload" => Ok(Some(StreamEvent::Reload)),
            "continuouscheck_started" => Ok(Some(StreamEvent::ContinuousCheckStarted)),
            "continuouscheck_stopped" => Ok(Some(StreamEvent::ContinuousCheckStopped)),
            other => {
                tracing::debug!(control = other, "Skipping unknown stream control line");
                Ok(None)
            }
        }
    }

    pub fn as_status(&self) -> Option<&HealthStatusUpdate> {
        match self {
            StreamEvent::Status(update) => Some(update),
            _ => None,
        }
    }
}

/// Initial state of a stream: every service once, plus the first heartbeat.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub services: Vec<HealthStatusUpdate>,
    pub heartbeat: Option<HealthStatusUpdate>,
}

impl Snapshot {
    /// Number of services whose last check was not green.
    pub fn unhealthy_count(&self) -> usize {
        self.services
            .iter()
            .filter(|u| u.level().is_some_and(|l| !l.is_healthy()))
            .count()
    }

    fn record(&mut self, update: HealthStatusUpdate) {
        match self
            .services
            .iter_mut()
            .find(|existing| existing.key() == update.key())
        {
            Some(existing) => *existing = update,
            None => self.services.push(update),
        }
    }
}

/// Read updates until the first heartbeat or the end of the stream.
///
/// The dashboard sends every known service before its first heartbeat, so
/// this yields the current state. Later duplicates of a service replace
/// earlier ones in place. Control events are ignored.
pub async fn collect_snapshot<S>(stream: S) -> Result<Snapshot, DashboardError>
where
    S: Stream<Item = Result<StreamEvent, DashboardError>>,
{
    let mut stream = std::pin::pin!(stream);
    let mut snapshot = Snapshot::default();

    while let Some(event) = stream.next().await {
        let update = match event? {
            StreamEvent::Status(update) => update,
            control => {
                tracing::debug!(event = ?control, "Ignoring control event in snapshot");
                continue;
            }
        };
        if update.is_heartbeat() {
            snapshot.heartbeat = Some(update);
            break;
        }
        snapshot.record(update);
    }

    tracing::debug!(
        services = snapshot.services.len(),
        heartbeat = snapshot.heartbeat.is_some(),
        "Collected health status snapshot"
    );
    Ok(snapshot)
}

//! Error type shared by the dashboard client and the status stream reader.

use thiserror::Error;

/// Every way a dashboard call can fail.
///
/// The `Display` output is exactly what gets shown to the user, so a failed
/// status renders as `"<code> : <body>"`.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The dashboard answered with a non-2xx status
    #[error("{status} : {body}")]
    Status { status: u16, body: String },

    /// Connection, timeout or body read failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A status stream line could not be parsed
    #[error("malformed health status: {0}")]
    Parse(String),
}

impl DashboardError {
    /// HTTP status of the failure, if the dashboard answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            DashboardError::Status { status, .. } => Some(*status),
            DashboardError::Transport(e) => e.status().map(|s| s.as_u16()),
            DashboardError::Parse(_) => None,
        }
    }
}

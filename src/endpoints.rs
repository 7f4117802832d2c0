//! Fixed dashboard endpoints.
//!
//! Every call the client makes targets one of these paths, joined onto the
//! configured base URL.

use std::fmt;

/// Actions that can be triggered on the dashboard with a single GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardAction {
    /// Start previewing the edited health-check configuration
    StartPreview,
    /// Stop the running preview
    StopPreview,
    /// Reload the published health-check configuration
    Reload,
}

impl DashboardAction {
    pub const ALL: [DashboardAction; 3] = [
        DashboardAction::StartPreview,
        DashboardAction::StopPreview,
        DashboardAction::Reload,
    ];

    /// Endpoint path for this action.
    pub fn path(self) -> &'static str {
        match self {
            DashboardAction::StartPreview => "/healthcheck/config/preview/start",
            DashboardAction::StopPreview => "/healthcheck/config/preview/stop",
            DashboardAction::Reload => "/healthcheck/reload",
        }
    }

    /// Whether a successful call wipes previously displayed messages.
    ///
    /// Only starting a preview does; stop and reload leave the panel alone.
    pub fn clears_messages(self) -> bool {
        matches!(self, DashboardAction::StartPreview)
    }
}

impl fmt::Display for DashboardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DashboardAction::StartPreview => "start preview",
            DashboardAction::StopPreview => "stop preview",
            DashboardAction::Reload => "reload dashboard",
        };
        f.write_str(name)
    }
}

/// Newline-delimited JSON health status streams exposed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusStream {
    /// Status of the published configuration
    #[default]
    Published,
    /// Status of the configuration currently being previewed
    Preview,
}

impl StatusStream {
    pub fn path(self) -> &'static str {
        match self {
            StatusStream::Published => "/healthcheck/healthstatusstream",
            StatusStream::Preview => "/healthcheck/config/healthstatusstream",
        }
    }
}

/// Join a base URL and an absolute endpoint path with exactly one slash.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_paths() {
        assert_eq!(
            DashboardAction::StartPreview.path(),
            "/healthcheck/config/preview/start"
        );
        assert_eq!(
            DashboardAction::StopPreview.path(),
            "/healthcheck/config/preview/stop"
        );
        assert_eq!(DashboardAction::Reload.path(), "/healthcheck/reload");
    }

    #[test]
    fn test_only_start_preview_clears() {
        let clearing: Vec<_> = DashboardAction::ALL
            .into_iter()
            .filter(|a| a.clears_messages())
            .collect();
        assert_eq!(clearing, vec![DashboardAction::StartPreview]);
    }

    #[test]
    fn test_stream_paths() {
        assert_eq!(
            StatusStream::Published.path(),
            "/healthcheck/healthstatusstream"
        );
        assert_eq!(
            StatusStream::Preview.path(),
            "/healthcheck/config/healthstatusstream"
        );
    }

    #[test]
    fn test_endpoint_url_trailing_slash() {
        let path = DashboardAction::Reload.path();
        assert_eq!(
            endpoint_url("http://localhost:8080", path),
            "http://localhost:8080/healthcheck/reload"
        );
        assert_eq!(
            endpoint_url("http://localhost:8080/", path),
            "http://localhost:8080/healthcheck/reload"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_base_prefix() {
        assert_eq!(
            endpoint_url("https://example.org/status/", "/healthcheck/reload"),
            "https://example.org/status/healthcheck/reload"
        );
    }
}

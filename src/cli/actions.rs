//! Preview and reload command implementation

use crate::cli::{load_config_with_overrides, ActionArgs};
use crate::client::{Dashboard, DashboardClient};
use crate::config::DashboardConfig;
use crate::endpoints::DashboardAction;
use crate::messages::{FilePanel, MessageDisplay, TerminalAlert};

/// Build the message display described by the config.
pub fn build_display(config: &DashboardConfig) -> MessageDisplay {
    let alert = TerminalAlert::new(config.display.wait_for_acknowledgement);
    match &config.display.error_panel {
        Some(path) => MessageDisplay::new(Some(Box::new(FilePanel::new(path))), Box::new(alert)),
        None => MessageDisplay::new(None, Box::new(alert)),
    }
}

/// Resolve the full configuration for an action command.
pub fn resolve_action_config(
    args: &ActionArgs,
) -> Result<DashboardConfig, Box<dyn std::error::Error>> {
    let mut config = load_config_with_overrides(&args.connection)?;
    if let Some(ref panel) = args.error_panel {
        config.display.error_panel = Some(panel.clone());
    }
    if args.no_wait {
        config.display.wait_for_acknowledgement = false;
    }
    Ok(config)
}

/// Handle `hcdash preview start|stop` and `hcdash reload`
///
/// Returns the response body on success. On failure the message has already
/// been shown through the configured display and `None` is returned.
pub async fn handle_action(
    action: DashboardAction,
    config: &DashboardConfig,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let client = DashboardClient::new(&config.server)?;
    let mut dashboard = Dashboard::new(client, build_display(config));

    let outcome = match action {
        DashboardAction::StartPreview => dashboard.start_preview().await,
        DashboardAction::StopPreview => dashboard.stop_preview().await,
        DashboardAction::Reload => dashboard.reload_dashboard().await,
    };

    Ok(outcome)
}

//! Output formatting helpers for CLI commands

use crate::stream::{HealthLevel, HealthStatusUpdate, Snapshot, StreamEvent};
use chrono::NaiveDateTime;
use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_time(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Coloured label for a health level; `None` means not checked yet.
pub fn level_label(level: Option<HealthLevel>) -> ColoredString {
    match level {
        Some(HealthLevel::Green) => "green".green(),
        Some(HealthLevel::Yellow) => "yellow".yellow(),
        Some(HealthLevel::Red) => "red".red(),
        Some(HealthLevel::Error) => "error".red().bold(),
        Some(HealthLevel::Unknown) => "unknown".magenta(),
        None => "pending".dimmed(),
    }
}

/// Format a snapshot as a table
pub fn format_snapshot_table(snapshot: &Snapshot) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Section",
        "Service",
        "Status",
        "Last Check",
        "Next Check",
        "Message",
    ]);

    for update in &snapshot.services {
        let check = update.last_check();
        table.add_row(vec![
            Cell::new(&update.section),
            Cell::new(&update.service),
            Cell::new(level_label(update.level()).to_string()),
            Cell::new(format_time(check.map(|c| c.started))),
            Cell::new(format_time(update.next_check())),
            Cell::new(check.map(|c| c.message.as_str()).unwrap_or("")),
        ]);
    }

    let mut output = String::new();
    if let Some(heartbeat) = &snapshot.heartbeat {
        output.push_str(&format!("Dashboard: {}\n", level_label(heartbeat.level())));
    }
    output.push_str(&format!(
        "Services: {} ({} not green)\n",
        snapshot.services.len(),
        snapshot.unhealthy_count()
    ));
    output.push_str(&table.to_string());
    output
}

/// Format a snapshot as JSON
pub fn format_snapshot_json(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

/// Format a single streamed update as one line
pub fn format_update_line(update: &HealthStatusUpdate) -> String {
    let check = update.last_check();
    let time = format_time(check.map(|c| c.ended));
    let message = check.map(|c| c.message.as_str()).unwrap_or("");

    format!(
        "[{}] {}.{} {} {}",
        time,
        update.section,
        update.service,
        level_label(update.level()),
        message
    )
    .trim_end()
    .to_string()
}

/// Format any stream event as one line
pub fn format_event_line(event: &StreamEvent) -> String {
    let notice = match event {
        StreamEvent::Status(update) => return format_update_line(update),
        StreamEvent::Reload => "dashboard configuration reloaded",
        StreamEvent::ContinuousCheckStarted => "continuous check started",
        StreamEvent::ContinuousCheckStopped => "continuous check stopped",
    };
    format!("{} {}", "--".dimmed(), notice.cyan())
}

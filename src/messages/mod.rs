//! User-facing message display.
//!
//! Messages go to an optional error panel as a bulleted list. When no panel is
//! configured they fall back to a single blocking alert.

mod alert;
mod panel;

pub use alert::{Alert, RecordingAlert, TerminalAlert};
pub use panel::{ErrorPanel, FilePanel, MemoryPanel, PanelState};

/// One or more messages to show the user.
///
/// A single string and a one-element list are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages(Vec<String>);

impl Messages {
    pub fn new(messages: Vec<String>) -> Self {
        Self(messages)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as list items, e.g. `<li>a</li><li>b</li>`.
    ///
    /// An empty list still renders one empty item.
    pub fn to_list_items(&self) -> String {
        if self.0.is_empty() {
            return "<li></li>".to_string();
        }
        self.0
            .iter()
            .map(|m| format!("<li>{}</li>", escape_html(m)))
            .collect()
    }

    /// Join with newlines for plain-text surfaces.
    pub fn joined(&self) -> String {
        self.0.join("\n")
    }
}

impl From<&str> for Messages {
    fn from(message: &str) -> Self {
        Self(vec![message.to_string()])
    }
}

impl From<String> for Messages {
    fn from(message: String) -> Self {
        Self(vec![message])
    }
}

impl From<Vec<String>> for Messages {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl From<Vec<&str>> for Messages {
    fn from(messages: Vec<&str>) -> Self {
        Self(messages.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Messages {
    fn from(messages: &[&str]) -> Self {
        Self(messages.iter().map(|m| m.to_string()).collect())
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Where messages end up: the error panel if present, otherwise an alert.
pub struct MessageDisplay {
    panel: Option<Box<dyn ErrorPanel + Send>>,
    alert: Box<dyn Alert + Send>,
}

impl MessageDisplay {
    pub fn new(panel: Option<Box<dyn ErrorPanel + Send>>, alert: Box<dyn Alert + Send>) -> Self {
        Self { panel, alert }
    }

    /// Display with a panel and a terminal alert fallback that never blocks.
    pub fn with_panel(panel: impl ErrorPanel + Send + 'static) -> Self {
        Self::new(Some(Box::new(panel)), Box::new(TerminalAlert::new(false)))
    }

    /// Display without a panel; every message becomes an alert.
    pub fn alert_only(alert: impl Alert + Send + 'static) -> Self {
        Self::new(None, Box::new(alert))
    }

    pub fn has_panel(&self) -> bool {
        self.panel.is_some()
    }

    /// Show messages, replacing whatever the panel held before.
    pub fn show(&mut self, messages: impl Into<Messages>) {
        let messages = messages.into();
        match self.panel.as_mut() {
            Some(panel) => {
                if let Err(e) = panel.replace(&messages.to_list_items()) {
                    tracing::warn!(error = %e, "Failed to update error panel");
                }
            }
            None => self.alert.alert(&messages.joined()),
        }
    }

    /// Empty and hide the panel. Without a panel this does nothing.
    pub fn clear(&mut self) {
        if let Some(panel) = self.panel.as_mut() {
            if let Err(e) = panel.clear() {
                tracing::warn!(error = %e, "Failed to clear error panel");
            }
        }
    }
}

impl std::fmt::Debug for MessageDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageDisplay")
            .field("has_panel", &self.has_panel())
            .finish()
    }
}

//! Blocking alert fallbacks used when no error panel exists.

use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::{Arc, Mutex};

/// A modal notification. Implementations may block until acknowledged.
pub trait Alert {
    fn alert(&mut self, text: &str);
}

/// Alert on the terminal.
///
/// Writes to stderr and, when `wait_for_ack` is set and stdin is a terminal,
/// blocks until the user presses Enter.
#[derive(Debug, Clone, Copy)]
pub struct TerminalAlert {
    wait_for_ack: bool,
}

impl TerminalAlert {
    pub fn new(wait_for_ack: bool) -> Self {
        Self { wait_for_ack }
    }

    fn write_alert(&self, text: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", text.red())?;

        let stdin = io::stdin();
        if self.wait_for_ack && stdin.is_terminal() {
            write!(stderr, "{}", "Press Enter to continue...".dimmed())?;
            stderr.flush()?;
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
        }
        Ok(())
    }
}

impl Alert for TerminalAlert {
    fn alert(&mut self, text: &str) {
        if let Err(e) = self.write_alert(text) {
            tracing::warn!(error = %e, "Failed to show alert");
        }
    }
}

/// Alert that only records what it was asked to show. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingAlert {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingAlert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        match self.alerts.lock() {
            Ok(alerts) => alerts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Alert for RecordingAlert {
    fn alert(&mut self, text: &str) {
        match self.alerts.lock() {
            Ok(mut alerts) => alerts.push(text.to_string()),
            Err(poisoned) => poisoned.into_inner().push(text.to_string()),
        }
    }
}

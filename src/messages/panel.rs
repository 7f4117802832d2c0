//! Error panel implementations.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A surface that holds the current list of error messages.
pub trait ErrorPanel {
    /// Replace the panel content with rendered list items and show it.
    fn replace(&mut self, list_items: &str) -> io::Result<()>;

    /// Empty the panel and hide it.
    fn clear(&mut self) -> io::Result<()>;
}

/// Panel backed by a file, typically an HTML fragment included by a page.
///
/// An empty file is a hidden panel.
#[derive(Debug, Clone)]
pub struct FilePanel {
    path: PathBuf,
}

impl FilePanel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ErrorPanel for FilePanel {
    fn replace(&mut self, list_items: &str) -> io::Result<()> {
        std::fs::write(&self.path, list_items)?;
        tracing::debug!(path = %self.path.display(), "Error panel updated");
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        // Nothing to hide if the panel was never written.
        if !self.path.exists() {
            return Ok(());
        }
        std::fs::write(&self.path, "")?;
        tracing::debug!(path = %self.path.display(), "Error panel cleared");
        Ok(())
    }
}

/// Snapshot of a [`MemoryPanel`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub content: String,
    pub visible: bool,
}

/// In-memory panel. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryPanel {
    state: Arc<Mutex<PanelState>>,
}

impl MemoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn with_state(&self, f: impl FnOnce(&mut PanelState)) {
        match self.state.lock() {
            Ok(mut state) => f(&mut *state),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }
}

impl ErrorPanel for MemoryPanel {
    fn replace(&mut self, list_items: &str) -> io::Result<()> {
        self.with_state(|state| {
            state.content = list_items.to_string();
            state.visible = true;
        });
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.with_state(|state| {
            state.content.clear();
            state.visible = false;
        });
        Ok(())
    }
}

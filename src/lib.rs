//! hcdash - client for a health-check dashboard
//!
//! Triggers the dashboard's preview and reload actions, surfaces failures
//! through an error panel or a blocking alert, and reads the dashboard's live
//! health status streams.
//!
//! ```no_run
//! use hcdash::client::{Dashboard, DashboardClient};
//! use hcdash::config::ServerConfig;
//! use hcdash::messages::{MemoryPanel, MessageDisplay};
//!
//! # async fn run() -> Result<(), hcdash::DashboardError> {
//! let client = DashboardClient::new(&ServerConfig::default())?;
//! let panel = MemoryPanel::new();
//! let mut dashboard = Dashboard::new(client, MessageDisplay::with_panel(panel.clone()));
//!
//! if dashboard.start_preview().await.is_none() {
//!     eprintln!("preview failed: {}", panel.state().content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod messages;
pub mod stream;

pub use error::DashboardError;

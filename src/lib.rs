//! # osquery-dash
//!
//! A terminal dashboard for the inventory data an osquery collector exposes.
//!
//! ## Features
//! - Operating system, collector and application-count summary cards
//! - Tabbed application table: all, recently used, deleted
//! - One fetch per run, with distinct connectivity / HTTP / format errors
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod view;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use error::FetchError;
pub use models::{ApiResponse, InstalledApp, OsVersion};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;

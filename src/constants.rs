//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Endpoint the collector serves its most recent snapshot on
pub const DEFAULT_API_URL: &str = "http://localhost:7070/api/latest_data";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Log file name, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "osquery-dash.log";

/// Directory under $HOME holding the config file
pub const CONFIG_DIR_NAME: &str = ".osquery-dash";

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Number of rows in the "recently used" view
pub const RECENT_APPS_LIMIT: usize = 10;

/// Placeholder for unset timestamps and versions
pub const NOT_AVAILABLE: &str = "N/A";

/// Application name
pub const APP_NAME: &str = "System Information Dashboard";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

//! Error types for `notices-demo`.

use localized_notifications::{CatalogError, ConfigError, NotificationError};
use thiserror::Error;

/// Failures that abort the simulated request.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Options were missing or invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The catalogue directory could not be loaded.
    #[error("failed to load message catalogue: {0}")]
    Catalog(#[from] CatalogError),
    /// The notification could not be recorded.
    #[error("failed to add notification: {0}")]
    Notification(#[from] NotificationError),
    /// Serialising the report failed.
    #[error("failed to serialise notifications: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the demo.
pub type Result<T, E = DemoError> = std::result::Result<T, E>;

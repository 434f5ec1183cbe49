//! Engine errors
//!
//! Most defensive conditions in the engine are silent no-ops (self edges,
//! symmetric edges, missing copy targets). The only failures surfaced to the
//! caller come from the notification cascade and from configuration loading.

use thiserror::Error;

use crate::property::PropertyName;

/// Engine result type
pub type Result<T> = std::result::Result<T, CascadeError>;

/// Engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascadeError {
    /// The cascade came back around to a property that is still being
    /// notified further up the same path.
    #[error("dependency cycle detected at {property}: {}", format_path(.path))]
    CycleDetected {
        property: PropertyName,
        path: Vec<PropertyName>,
    },

    /// The cascade nested deeper than the configured limit.
    #[error("cascade exceeded depth limit {limit} at {property}")]
    DepthExceeded { property: PropertyName, limit: usize },

    #[error("invalid engine configuration: {0}")]
    Config(String),
}

fn format_path(path: &[PropertyName]) -> String {
    path.iter()
        .map(PropertyName::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl From<serde_json::Error> for CascadeError {
    fn from(err: serde_json::Error) -> Self {
        CascadeError::Config(err.to_string())
    }
}

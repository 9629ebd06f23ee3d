//! Domain errors using thiserror for structured error handling.
//!
//! Each enum covers one collaborator of the shot chart pipeline. The core
//! itself only ever produces `MalformedEventError`, and only for a single play.

use serde::Serialize;
use thiserror::Error;

/// A recognized shot event that is missing a required field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Malformed play #{index}: missing {field}")]
pub struct MalformedEventError {
    /// Position of the play in `liveData.plays.allPlays`
    pub index: usize,
    /// Feed path of the missing field
    pub field: &'static str,
}

impl MalformedEventError {
    pub fn new(index: usize, field: &'static str) -> Self {
        Self { index, field }
    }
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid game id: {0:?}")]
    InvalidGameId(String),

    #[error("Network error fetching {url}")]
    Network {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("Feed request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse game feed from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to read game feed from {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Game feed is missing {0}")]
    MissingField(&'static str),

    #[error("Invalid start time {value:?}")]
    InvalidStartTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Could not determine user config directory")]
    NoConfigDir,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write chart output to {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize chart result")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write summary")]
    Io(#[from] std::io::Error),
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = MalformedEventError::new(42, "coordinates.x");
        assert_eq!(err.to_string(), "Malformed play #42: missing coordinates.x");

        let err = FeedError::Status {
            url: "https://example.test/game/1/feed/live".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Feed request to https://example.test/game/1/feed/live returned status 404"
        );

        let err = FeedError::MissingField("liveData.linescore.currentPeriodOrdinal");
        assert_eq!(
            err.to_string(),
            "Game feed is missing liveData.linescore.currentPeriodOrdinal"
        );
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_err = ConfigError::LoadFailed {
            path: "/test/config.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(config_err.source().is_some());
        assert_eq!(
            config_err.to_string(),
            "Failed to load configuration from /test/config.json"
        );
    }
}

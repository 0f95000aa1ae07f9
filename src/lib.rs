//! KMA Feed Processor Library
//!
//! A Rust library for decoding Korea Meteorological Administration (KMA)
//! APIHUB typ01 fixed-width text feeds into structured records.
//!
//! This library provides tools for:
//! - Locating header rows in semi-structured typ01 feed text
//! - Decoding short-term land forecast tables into field-name/value records
//! - Decoding the forecast region table into fixed-shape region records
//! - Fetching feeds over HTTP with EUC-KR to UTF-8 recoding
//! - Surfacing upstream failures with status codes and decoded error bodies

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod feed_decoder;
        pub mod transport;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FeedPayload, FeedResource, ForecastRecord, RegionRecord};
pub use config::KmaConfig;

/// Result type alias for the KMA processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for KMA feed fetching and output operations
///
/// The feed decoders themselves contribute no variants: decoding is total
/// and degrades to empty or partially-populated records on malformed input.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP transport failure (connection, timeout, invalid URL)
    #[error("HTTP request failed: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream returned a non-2xx status
    #[error("KMA API returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Response bytes were not valid EUC-KR
    #[error("EUC-KR decoding error: {message}")]
    Encoding { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create an HTTP transport error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create an upstream status error with the decoded response body
    pub fn upstream_status(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }

    /// The HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

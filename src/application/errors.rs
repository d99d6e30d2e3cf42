//! Application layer errors

use thiserror::Error;

/// Transport errors raised by messaging adapters
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while fetching or translating content.
///
/// The variants only matter for logs; users see the message after "An error occurred: ".
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected response from {url}: {message}")]
    Parse { url: String, message: String },

    #[error("translation failed: {0}")]
    Translation(String),
}

impl ContentError {
    pub fn network(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ContentError::Network { url: url.into(), message: err.to_string() }
    }

    pub fn parse(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ContentError::Parse { url: url.into(), message: err.to_string() }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

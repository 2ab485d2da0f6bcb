// src/errors.rs

use thiserror::Error;

/// Everything that can go wrong in a send cycle or at start-up.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Input trimmed to nothing. Never rendered.
    #[error("empty input")]
    EmptyInput,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ChatError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn network_failure(msg: impl Into<String>) -> Self {
        Self::NetworkFailure(msg.into())
    }

    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display_carries_status() {
        assert_eq!(ChatError::ServerError(500).to_string(), "Server error: 500");
    }
}

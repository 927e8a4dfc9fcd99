/*
[INPUT]:  Error sources (HTTP transport, API status, serialization, signing)
[OUTPUT]: Structured error types for the chat API and the two failure kinds
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the chat adapter
#[derive(Error, Debug)]
pub enum ChatError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Response decoded but lacked an expected field
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wallet signing failed
    #[error("Signing error: {0}")]
    Signing(String),
}

impl ChatError {
    /// Create an API error from status code and response body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        ChatError::Api {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// Check if the underlying transport timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, ChatError::Http(err) if err.is_timeout())
    }
}

/// Fatal failure of the nonce/sign/login handshake
#[derive(Error, Debug)]
#[error("Authentication failed: {source}")]
pub struct AuthError {
    #[from]
    source: ChatError,
}

impl AuthError {
    pub fn inner(&self) -> &ChatError {
        &self.source
    }
}

/// Non-fatal failure of a single message send
#[derive(Error, Debug)]
#[error("Send failed: {source}")]
pub struct SendError {
    #[from]
    source: ChatError,
}

impl SendError {
    pub fn inner(&self) -> &ChatError {
        &self.source
    }
}

/// Result type alias for chat adapter operations
pub type Result<T> = std::result::Result<T, ChatError>;

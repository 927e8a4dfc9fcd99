/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod chat;
pub mod client;
pub mod error;

pub use error::{AuthError, ChatError, Result, SendError};

pub use client::{ChatClient, ClientConfig};

/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Query for GET /nonce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonceQuery<'a> {
    pub address: &'a str,
}

/// Body for POST /login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest<'a> {
    pub address: &'a str,
    pub signature: &'a str,
}

/// Body for POST /send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest<'a> {
    pub message: &'a str,
}

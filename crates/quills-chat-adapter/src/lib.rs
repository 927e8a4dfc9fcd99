/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public chat adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthManager,
    Credential,
    EvmWalletSigner,
    MockWalletSigner,
    WalletSigner,
    recover_address,
};

// Re-export commonly used types from http
pub use http::{
    AuthError,
    ChatClient,
    ChatError,
    ClientConfig,
    Result,
    SendError,
};

// Re-export all types
pub use types::*;

/*
[INPUT]:  Public API exports for quills-chat-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod broadcaster;
pub mod config;

// Re-export main types for convenience
pub use broadcaster::Broadcaster;
pub use config::{BotConfig, ConfigError};

/*
[INPUT]:  Process environment (optionally seeded from .env)
[OUTPUT]: Validated bot configuration
[POS]:    Configuration layer - startup settings
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use url::Url;

pub const DEFAULT_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_MESSAGE: &str = "Hello from bot!";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Load(#[from] config::ConfigError),

    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },
}

/// Raw environment values, keyed by lowercased variable name
#[derive(Debug, Default, Deserialize)]
struct EnvVars {
    rpc_url: Option<String>,
    private_key: Option<String>,
    chat_api_url: Option<String>,
    message_interval_ms: Option<String>,
    message_text: Option<String>,
}

/// Startup configuration for the chat bot
#[derive(Clone)]
pub struct BotConfig {
    /// JSON-RPC endpoint of the wallet's chain; recorded only
    pub rpc_url: Option<Url>,
    /// Base URL of the chat API, e.g. `https://quills.fun/api/chat`
    pub chat_api_url: Url,
    /// Delay between sends
    pub interval: Duration,
    /// Text posted on every tick
    pub message: String,
    private_key: String,
}

impl BotConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    /// Load configuration from an explicit variable map instead of the process environment
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, ConfigError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::from_source(Environment::default().source(Some(vars)))
    }

    fn from_source(source: Environment) -> Result<Self, ConfigError> {
        let vars: EnvVars = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Self::from_env_vars(vars)
    }

    fn from_env_vars(vars: EnvVars) -> Result<Self, ConfigError> {
        let private_key = non_empty(vars.private_key).ok_or(ConfigError::Missing("PRIVATE_KEY"))?;

        let chat_api_url = non_empty(vars.chat_api_url).ok_or(ConfigError::Missing("CHAT_API_URL"))?;
        let chat_api_url = parse_url("CHAT_API_URL", &chat_api_url)?;

        let rpc_url = non_empty(vars.rpc_url)
            .map(|raw| parse_url("RPC_URL", &raw))
            .transpose()?;

        let interval = Duration::from_millis(parse_interval_ms(vars.message_interval_ms));
        let message = non_empty(vars.message_text).unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

        Ok(Self {
            rpc_url,
            chat_api_url,
            interval,
            message,
            private_key,
        })
    }

    /// Hex-encoded wallet private key
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("rpc_url", &self.rpc_url)
            .field("chat_api_url", &self.chat_api_url)
            .field("interval", &self.interval)
            .field("message", &self.message)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { var, source })
}

// Unset, unparsable, or zero all fall back to the default period.
fn parse_interval_ms(raw: Option<String>) -> u64 {
    let Some(raw) = non_empty(raw) else {
        return DEFAULT_INTERVAL_MS;
    };

    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => {
            warn!(
                value = %raw,
                default_ms = DEFAULT_INTERVAL_MS,
                "invalid MESSAGE_INTERVAL_MS, using default"
            );
            DEFAULT_INTERVAL_MS
        }
        Ok(ms) => ms,
    }
}

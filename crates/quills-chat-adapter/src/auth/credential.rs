/*
[INPUT]:  Bearer token returned by the login endpoint
[OUTPUT]: Read-only credential for authenticated requests
[POS]:    Auth layer - token holder for the process lifetime
[UPDATE]: When token handling or redaction rules change
*/

use std::fmt;
use std::sync::Arc;

const PREVIEW_CHARS: usize = 10;

/// Bearer credential obtained from a successful login.
///
/// Immutable once created; clones share the same token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: Arc<str>,
    wallet_address: Arc<str>,
}

impl Credential {
    pub fn new(token: impl Into<Arc<str>>, wallet_address: impl Into<Arc<str>>) -> Self {
        Self {
            token: token.into(),
            wallet_address: wallet_address.into(),
        }
    }

    /// Raw token for the Authorization header
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Address the token was issued for
    pub fn wallet_address(&self) -> &str {
        &self.wallet_address
    }

    /// Log-safe prefix of the token, e.g. `eyJhbGciOi...`
    pub fn preview(&self) -> String {
        let head: String = self.token.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &self.preview())
            .field("wallet_address", &self.wallet_address)
            .finish()
    }
}

/*
[INPUT]:  Wallet signer and HTTP client
[OUTPUT]: Authenticated credential (bearer token)
[POS]:    Auth layer - orchestrates complete authentication flow
[UPDATE]: When auth endpoints or flow steps change
*/

use reqwest::Method;
use tracing::debug;

use crate::http::{AuthError, ChatClient, ChatError, Result};
use crate::types::{LoginRequest, LoginResponse, NonceQuery, NonceResponse};

use super::{Credential, WalletSigner};

/// Manages the nonce/sign/login authentication flow
#[derive(Debug, Clone)]
pub struct AuthManager {
    client: ChatClient,
}

impl AuthManager {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ChatClient {
        &self.client
    }

    /// Step 1: Request a one-time challenge for the address
    ///
    /// GET /nonce?address={address}
    pub async fn request_nonce(&self, address: &str) -> Result<String> {
        let builder = self
            .client
            .request(Method::GET, "nonce")?
            .query(&NonceQuery { address });
        let response: NonceResponse = self.client.send_json(builder).await?;

        response
            .nonce
            .ok_or_else(|| ChatError::InvalidResponse("nonce response missing 'nonce'".to_string()))
    }

    /// Step 2: Login - submit signature to get a bearer token
    ///
    /// POST /login
    pub async fn login(&self, address: &str, signature: &str) -> Result<String> {
        let builder = self
            .client
            .request(Method::POST, "login")?
            .json(&LoginRequest { address, signature });
        let response: LoginResponse = self.client.send_json(builder).await?;

        response
            .token
            .ok_or_else(|| ChatError::InvalidResponse("login response missing 'token'".to_string()))
    }

    /// Complete authentication flow
    ///
    /// 1. Request nonce for the wallet address
    /// 2. Sign nonce with wallet
    /// 3. Login to get the bearer token
    pub async fn authenticate(
        &self,
        wallet: &dyn WalletSigner,
    ) -> std::result::Result<Credential, AuthError> {
        let address = wallet.address();

        let nonce = self.request_nonce(address).await?;
        debug!(%address, "received login nonce");

        let signature = wallet.sign_message(&nonce)?;

        let token = self.login(address, &signature).await?;

        Ok(Credential::new(token, address))
    }
}

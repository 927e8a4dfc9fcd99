/*
[INPUT]:  Bearer credential and message text
[OUTPUT]: Server-reported send status
[POS]:    HTTP layer - chat endpoints (require bearer auth)
[UPDATE]: When adding new chat endpoints or changing payload format
*/

use crate::auth::Credential;
use crate::http::{ChatClient, Result};
use crate::types::{SendMessageRequest, SendMessageResponse};
use reqwest::Method;

impl ChatClient {
    /// Post a chat message
    ///
    /// POST /send
    /// Requires: Authorization: Bearer <token>
    pub async fn send_message(
        &self,
        credential: &Credential,
        message: &str,
    ) -> Result<SendMessageResponse> {
        let builder = self
            .request(Method::POST, "send")?
            .bearer_auth(credential.token())
            .json(&SendMessageRequest { message });
        self.send_json(builder).await
    }
}

/*
[INPUT]:  EVM private key (hex string)
[OUTPUT]: EIP-191 signed messages and checksummed wallet address
[POS]:    Auth layer - EVM wallet implementation
[UPDATE]: When signing logic or EVM address formatting changes
*/

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Signature;
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;

use crate::auth::WalletSigner;
use crate::http::{ChatError, Result};

/// Signer for EVM-compatible wallets
pub struct EvmWalletSigner {
    signer: PrivateKeySigner,
    address: String,
}

impl EvmWalletSigner {
    /// Create a new EVM wallet signer from a hex-encoded private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings.
    pub fn new(private_key_hex: &str) -> Result<Self> {
        let private_key_hex = private_key_hex.trim();
        let private_key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        if private_key_hex.is_empty() {
            return Err(ChatError::Config("EVM private key is empty".to_string()));
        }

        let signer = PrivateKeySigner::from_str(private_key_hex)
            .map_err(|e| ChatError::Config(format!("Invalid EVM private key: {}", e)))?;

        let address = signer.address().to_checksum(None);

        Ok(Self { signer, address })
    }
}

// Never print key material.
impl fmt::Debug for EvmWalletSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvmWalletSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl WalletSigner for EvmWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    fn sign_message(&self, message: &str) -> Result<String> {
        let signature = self
            .signer
            .sign_message_sync(message.as_bytes())
            .map_err(|e| ChatError::Signing(format!("Failed to sign EVM message: {}", e)))?;

        // as_bytes() is [r, s, v] with v in {27, 28}
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}

/// Recover the checksummed address that produced a personal-message signature.
pub fn recover_address(message: &str, signature_hex: &str) -> Result<String> {
    let signature_hex = signature_hex.strip_prefix("0x").unwrap_or(signature_hex);
    let bytes = hex::decode(signature_hex)
        .map_err(|e| ChatError::Signing(format!("Invalid signature hex: {}", e)))?;
    let signature = Signature::from_raw(&bytes)
        .map_err(|e| ChatError::Signing(format!("Invalid signature bytes: {}", e)))?;
    let address = signature
        .recover_address_from_msg(message.as_bytes())
        .map_err(|e| ChatError::Signing(format!("Failed to recover signer: {}", e)))?;
    Ok(address.to_checksum(None))
}

/*
[INPUT]:  Message to sign and wallet private key
[OUTPUT]: Signature string for authentication
[POS]:    Auth layer - wallet integration abstraction
[UPDATE]: When adding new wallet types or changing signature format
*/

use crate::http::Result;

/// Trait for wallet signing operations
///
/// Signing is a local computation and never suspends, so the trait is
/// synchronous.
pub trait WalletSigner: Send + Sync {
    /// Get the wallet address
    fn address(&self) -> &str;

    /// Sign a message and return the signature (hex-encoded, 0x-prefixed)
    fn sign_message(&self, message: &str) -> Result<String>;
}

/// Mock wallet signer for testing
#[derive(Debug, Clone)]
pub struct MockWalletSigner {
    address: String,
    signature: String,
}

impl MockWalletSigner {
    /// Create a new mock signer with predetermined signature
    pub fn new(address: &str, signature: &str) -> Self {
        Self {
            address: address.to_string(),
            signature: signature.to_string(),
        }
    }
}

impl WalletSigner for MockWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    fn sign_message(&self, _message: &str) -> Result<String> {
        Ok(self.signature.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_signer() {
        let signer = MockWalletSigner::new("0x1234567890abcdef", "0xmock_signature");

        assert_eq!(signer.address(), "0x1234567890abcdef");

        let signature = signer.sign_message("test message").unwrap();
        assert_eq!(signature, "0xmock_signature");
    }
}

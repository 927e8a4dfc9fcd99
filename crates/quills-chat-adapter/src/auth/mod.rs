/*
[INPUT]:  Wallet private key and chat API client
[OUTPUT]: Signed challenges, bearer credentials, and auth errors
[POS]:    Auth layer - handles chat API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credential;
pub mod evm_wallet;
pub mod manager;
pub mod wallet;

pub use credential::Credential;
pub use evm_wallet::{EvmWalletSigner, recover_address};
pub use manager::AuthManager;
pub use wallet::{MockWalletSigner, WalletSigner};

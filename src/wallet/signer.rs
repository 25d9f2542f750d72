//! Environment-keyed signing wallet.
//!
//! Stands in for a browser wallet extension: key discovery happens out of
//! band (the environment variable), authorization is implicit because the
//! key holder is the process owner.

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::wallet::provider::{WalletError, WalletProvider};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "ASSESSMENT_PRIVATE_KEY";

/// Wallet backed by a private key from the environment.
#[derive(Debug, Clone)]
pub struct EnvKeyWallet {
    signer: PrivateKeySigner,
}

impl EnvKeyWallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Security
    /// The key is parsed and held in the signer only. It is never logged.
    pub fn from_private_key(private_key_hex: &str) -> Result<Self, WalletError> {
        // Strip 0x prefix if present
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| WalletError::InvalidKey(format!("{}", e)))?;

        tracing::info!(address = %signer.address(), "wallet initialized");

        Ok(Self { signer })
    }

    /// Look for a wallet in the environment.
    ///
    /// Absence of `ASSESSMENT_PRIVATE_KEY` means no wallet is installed and
    /// yields `Ok(None)`; a present but malformed key is an error.
    pub fn discover() -> Result<Option<Self>, WalletError> {
        match std::env::var(PRIVATE_KEY_ENV_VAR) {
            Ok(key) => Ok(Some(Self::from_private_key(&key)?)),
            Err(_) => Ok(None),
        }
    }

    /// The wallet's account address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Hand the signer to the transaction layer.
    pub fn signer(&self) -> PrivateKeySigner {
        self.signer.clone()
    }
}

impl WalletProvider for EnvKeyWallet {
    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        // A key wallet has exactly one account and it is always authorized.
        Ok(vec![self.signer.address()])
    }

    async fn request_authorization(&self) -> Result<Address, WalletError> {
        Ok(self.signer.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_wallet_from_private_key() {
        let wallet = EnvKeyWallet::from_private_key(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_wallet_with_0x_prefix() {
        let wallet =
            EnvKeyWallet::from_private_key(&format!("0x{}", TEST_PRIVATE_KEY)).unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_invalid_private_key() {
        let result = EnvKeyWallet::from_private_key("invalid_key");
        assert!(matches!(result, Err(WalletError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_single_account_always_authorized() {
        let wallet = EnvKeyWallet::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let accounts = wallet.accounts().await.unwrap();
        assert_eq!(accounts, vec![wallet.address()]);
        assert_eq!(wallet.request_authorization().await.unwrap(), wallet.address());
    }
}

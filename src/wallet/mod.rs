//! Wallet collaborator.
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - The session sees accounts and signatures, never key material

pub mod provider;
pub mod signer;

pub use provider::{WalletError, WalletProvider};
pub use signer::{EnvKeyWallet, PRIVATE_KEY_ENV_VAR};

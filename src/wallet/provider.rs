//! Wallet provider seam.

use std::future::Future;

use alloy::primitives::Address;
use thiserror::Error;

/// Errors from the wallet collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No wallet is present at all.
    #[error("no wallet available")]
    Unavailable,

    /// The wallet refused to authorize an account.
    #[error("wallet authorization denied")]
    AuthorizationDenied,

    /// The configured key material could not be parsed.
    #[error("invalid private key: {0}")]
    InvalidKey(String),
}

/// Opaque wallet capabilities: list already-authorized accounts and request
/// authorization for one. Signing happens behind the ledger binding; the
/// session never touches key material.
pub trait WalletProvider {
    /// Non-mutating query for accounts that are already authorized.
    fn accounts(&self) -> impl Future<Output = Result<Vec<Address>, WalletError>> + Send;

    /// Explicitly request account authorization. May prompt the user, so the
    /// session only calls this from a user-initiated connect action.
    fn request_authorization(&self) -> impl Future<Output = Result<Address, WalletError>> + Send;
}

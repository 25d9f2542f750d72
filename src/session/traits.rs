//! Collaborator seams the session drives.
//!
//! The session is generic over these traits so the same state machine runs
//! against the in-process ledger, the JSON-RPC contract binding, and the
//! test doubles. Methods return `impl Future + Send` so generic callers can
//! hand the futures to the runtime.

use std::future::Future;

use alloy::primitives::{Address, U256};

use crate::session::error::ClientError;

/// A callable reference to the ledger, bound to one caller identity.
///
/// Mutating calls resolve only once the hosting environment has confirmed
/// inclusion; there is no ledger-side pending state to observe.
pub trait LedgerHandle: Send + Sync {
    /// Read the current balance. Callable by anyone.
    fn balance(&self) -> impl Future<Output = Result<U256, ClientError>> + Send;

    /// Add `amount` to the balance. Owner only.
    fn deposit(&self, amount: U256) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Subtract `amount` from the balance. Owner only.
    fn withdraw(&self, amount: U256) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Double the balance. Owner only.
    fn double_balance(&self) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// Binds an authorized account to a ledger at a configured address.
pub trait LedgerConnector {
    type Handle: LedgerHandle;

    /// Produce a callable handle with `account` as the transaction signer.
    fn bind(
        &self,
        account: Address,
    ) -> impl Future<Output = Result<Self::Handle, ClientError>> + Send;
}

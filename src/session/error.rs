//! Client-side error taxonomy.

use thiserror::Error;

use crate::chain::types::ChainError;
use crate::ledger::types::LedgerError;
use crate::wallet::provider::WalletError;

/// Errors surfaced to the session's caller.
///
/// Mutation failures are surfaced synchronously and never retried
/// automatically; the ledger guarantees they left no partial state behind.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No wallet collaborator is present. Terminal for the session.
    #[error("no wallet available")]
    NoWallet,

    /// The requested operation needs a bound ledger with a loaded balance.
    #[error("session is not bound to the ledger")]
    NotConnected,

    /// The wallet collaborator refused or failed.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// The ledger rejected the call.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Transport-level failure talking to the chain.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

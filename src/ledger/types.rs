//! Ledger error taxonomy and event records.

use alloy::primitives::U256;
use thiserror::Error;

/// Errors a ledger operation can reject with.
///
/// Every rejection happens before any state change, so a caller observing
/// one of these can rely on the balance being exactly what it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Caller identity does not match the ledger owner.
    #[error("caller is not the ledger owner")]
    Unauthorized,

    /// Withdraw amount exceeds the current balance.
    #[error("insufficient balance: have {balance}, requested {amount}")]
    InsufficientBalance { balance: U256, amount: U256 },

    /// Checked arithmetic overflowed the balance integer.
    #[error("balance overflow")]
    Overflow,
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// One record in the append-only event log, emitted per successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    /// Balance was increased by `amount`.
    Deposit { amount: U256 },
    /// Balance was decreased by `amount`.
    Withdraw { amount: U256 },
    /// Balance was doubled; carries the resulting balance.
    BalanceDoubled { new_balance: U256 },
}

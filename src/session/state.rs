//! Session state machine states.

use alloy::primitives::{Address, U256};

/// Session states in strict forward order. There is no backward transition;
/// a session that needs to start over is dropped and rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No wallet handle available. The UI instructs the user to install one;
    /// no further action is possible.
    NoWallet,
    /// Wallet handle available but no account authorized yet.
    WalletFound,
    /// An account is authorized but the ledger is not yet bound.
    AccountConnected { account: Address },
    /// A callable ledger reference is bound with `account` as signer.
    LedgerBound { account: Address },
    /// The ledger balance has been read and is on display.
    BalanceLoaded { account: Address, balance: U256 },
}

impl SessionState {
    /// The authorized account, once one exists.
    pub fn account(&self) -> Option<Address> {
        match self {
            SessionState::NoWallet | SessionState::WalletFound => None,
            SessionState::AccountConnected { account }
            | SessionState::LedgerBound { account }
            | SessionState::BalanceLoaded { account, .. } => Some(*account),
        }
    }
}

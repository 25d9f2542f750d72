//! Owner-gated balance ledger.
//!
//! # Data Flow
//! ```text
//! caller identity + amount
//!     → state.rs (owner check, checked arithmetic, event append)
//!     → local.rs (shared in-process handle, one bound caller each)
//! ```
//!
//! # Invariants
//! - The balance is never negative (withdraw is rejected up front)
//! - Only the owner identity can mutate the balance
//! - Failed operations leave balance and event log untouched

pub mod local;
pub mod state;
pub mod types;

pub use local::{LocalConnector, LocalLedger};
pub use state::Ledger;
pub use types::{LedgerError, LedgerEvent, LedgerResult};

//! On-chain ledger integration.
//!
//! # Data Flow
//! ```text
//! wallet signer + RPC URL
//!     → client.rs (provider with timeouts, chain-id verification)
//!     → binding.rs (typed Assessment calls, revert decoding, confirmations)
//! ```
//!
//! # Security Constraints
//! - All RPC calls have configurable timeouts
//! - Graceful degradation when chain verification fails at bind time

pub mod binding;
pub mod client;
pub mod types;

pub use binding::{RpcConnector, RpcLedger};
pub use client::ChainClient;
pub use types::{ChainError, ChainResult};

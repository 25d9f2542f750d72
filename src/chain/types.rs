//! Chain-specific error definitions.

use thiserror::Error;

/// Errors that can occur talking to the chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Connected node reports a different chain than configured.
    #[error("chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Transaction was included but reverted on-chain.
    #[error("transaction reverted: {0}")]
    Reverted(String),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

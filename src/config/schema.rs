//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the assessment client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where the ledger lives and how to reach it.
    pub chain: ChainConfig,

    /// Price collaborator settings.
    pub price: PriceConfig,
}

/// Which ledger backing the session binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChainMode {
    /// In-process ledger, no node required.
    #[default]
    Local,
    /// Deployed contract over JSON-RPC.
    Rpc,
}

/// Ledger location and RPC settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Ledger backing mode.
    pub mode: ChainMode,

    /// JSON-RPC endpoint (rpc mode).
    pub rpc_url: String,

    /// Expected chain ID, verified at bind time.
    pub chain_id: u64,

    /// Per-request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Confirmations to wait for before a mutation counts as included.
    pub confirmation_blocks: u32,

    /// Fixed deployment address of the Assessment contract (rpc mode).
    pub contract_address: String,

    /// Seed balance for the in-process ledger (local mode), in whole ETH.
    pub initial_balance_eth: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            mode: ChainMode::Local,
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 31337,
            rpc_timeout_secs: 10,
            confirmation_blocks: 1,
            contract_address: String::new(),
            initial_balance_eth: 0,
        }
    }
}

/// Price collaborator settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PriceConfig {
    /// Whether to fetch a fiat estimate at all.
    pub enabled: bool,

    /// Quote endpoint returning a fiat-symbol → rate mapping.
    pub endpoint: String,

    /// Asset symbol to quote.
    pub asset: String,

    /// Fiat symbol to quote in.
    pub fiat: String,

    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://min-api.cryptocompare.com/data/price".to_string(),
            asset: "ETH".to_string(),
            fiat: "USD".to_string(),
            timeout_secs: 5,
        }
    }
}

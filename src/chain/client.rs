//! Chain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect a wallet-backed provider to the configured JSON-RPC endpoint
//! - Query chain state (chain ID, block number, native balances)
//! - Handle timeouts and network errors gracefully

use std::time::Duration;

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use tokio::time::timeout;

use crate::chain::types::{ChainError, ChainResult};
use crate::config::schema::ChainConfig;

/// Chain RPC client wrapper around one configured node.
#[derive(Clone)]
pub struct ChainClient {
    provider: DynProvider,
    config: ChainConfig,
    timeout_duration: Duration,
}

impl ChainClient {
    /// Build a client whose provider signs with the given key.
    pub fn connect(config: ChainConfig, signer: PrivateKeySigner) -> ChainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            ChainError::Rpc(format!("invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased();

        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);

        tracing::info!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            "chain client initialized"
        );

        Ok(Self {
            provider,
            config,
            timeout_duration,
        })
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> ChainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id != self.config.chain_id {
            return Err(ChainError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> ChainResult<u64> {
        let fut = self.provider.get_chain_id();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(ChainError::Rpc(e.to_string())),
            Err(_) => Err(ChainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> ChainResult<u64> {
        let fut = self.provider.get_block_number();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(ChainError::Rpc(e.to_string())),
            Err(_) => Err(ChainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Get the native balance of an address.
    pub async fn get_native_balance(&self, address: Address) -> ChainResult<U256> {
        let fut = self.provider.get_balance(address);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(ChainError::Rpc(e.to_string())),
            Err(_) => Err(ChainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// The chain configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Per-request timeout.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout_duration
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}

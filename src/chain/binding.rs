//! Typed binding to the deployed Assessment contract.
//!
//! # Responsibilities
//! - Expose the contract surface through the session's `LedgerHandle` seam
//! - Decode revert data back into ledger errors
//! - Suspend mutating calls until the network confirms inclusion

use std::time::Duration;

use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use alloy::sol_types::SolInterface;
use tokio::time::timeout;

use crate::chain::client::ChainClient;
use crate::chain::types::ChainError;
use crate::config::schema::ChainConfig;
use crate::ledger::types::LedgerError;
use crate::session::error::ClientError;
use crate::session::traits::{LedgerConnector, LedgerHandle};

sol! {
    #[sol(rpc)]
    contract Assessment {
        error Unauthorized();
        error InsufficientBalance(uint256 balance, uint256 withdrawAmount);

        event Deposit(uint256 amount);
        event Withdraw(uint256 amount);
        event BalanceDoubled(uint256 newBalance);

        function getBalance() external view returns (uint256);
        function deposit(uint256 amount) external payable;
        function withdraw(uint256 amount) external;
        function doubleBalance() external;
    }
}

/// Callable ledger reference over JSON-RPC, signing with the bound account.
pub struct RpcLedger {
    contract: Assessment::AssessmentInstance<DynProvider>,
    timeout_duration: Duration,
    confirmations: u64,
}

impl RpcLedger {
    async fn confirm(
        &self,
        pending: PendingTransactionBuilder<alloy::network::Ethereum>,
    ) -> Result<(), ClientError> {
        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .with_timeout(Some(self.timeout_duration))
            .get_receipt()
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))?;

        if !receipt.status() {
            return Err(ChainError::Reverted(format!(
                "tx {} reverted on-chain",
                receipt.transaction_hash
            ))
            .into());
        }

        tracing::info!(
            tx = %receipt.transaction_hash,
            block = receipt.block_number.unwrap_or_default(),
            "transaction confirmed"
        );
        Ok(())
    }
}

impl LedgerHandle for RpcLedger {
    async fn balance(&self) -> Result<U256, ClientError> {
        let call = self.contract.getBalance();
        let fut = call.call();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(balance)) => Ok(balance),
            Ok(Err(e)) => Err(map_contract_err(e)),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs()).into()),
        }
    }

    async fn deposit(&self, amount: U256) -> Result<(), ClientError> {
        let pending = self
            .contract
            .deposit(amount)
            .send()
            .await
            .map_err(map_contract_err)?;
        self.confirm(pending).await
    }

    async fn withdraw(&self, amount: U256) -> Result<(), ClientError> {
        let pending = self
            .contract
            .withdraw(amount)
            .send()
            .await
            .map_err(map_contract_err)?;
        self.confirm(pending).await
    }

    async fn double_balance(&self) -> Result<(), ClientError> {
        let pending = self
            .contract
            .doubleBalance()
            .send()
            .await
            .map_err(map_contract_err)?;
        self.confirm(pending).await
    }
}

/// Binds the connected signer to the contract at the configured address.
pub struct RpcConnector {
    config: ChainConfig,
    signer: PrivateKeySigner,
}

impl RpcConnector {
    pub fn new(config: ChainConfig, signer: PrivateKeySigner) -> Self {
        Self { config, signer }
    }
}

impl LedgerConnector for RpcConnector {
    type Handle = RpcLedger;

    async fn bind(&self, account: Address) -> Result<RpcLedger, ClientError> {
        let contract_address: Address = self.config.contract_address.parse().map_err(|e| {
            ChainError::Rpc(format!(
                "invalid contract address '{}': {}",
                self.config.contract_address, e
            ))
        })?;

        let client = ChainClient::connect(self.config.clone(), self.signer.clone())?;

        // Verify the node, but degrade gracefully if it is unreachable; the
        // first real call will surface the failure to the user.
        match client.verify_chain_id().await {
            Ok(()) => {
                if let Ok(block) = client.get_block_number().await {
                    tracing::info!(account = %account, block, "chain verified");
                }
                if let Ok(balance) = client.get_native_balance(account).await {
                    tracing::info!(account = %account, balance = %balance, "signer gas balance");
                }
            }
            Err(e) => tracing::warn!(error = %e, "chain verification failed at bind"),
        }

        let contract = Assessment::new(contract_address, client.provider().clone());

        Ok(RpcLedger {
            contract,
            timeout_duration: client.timeout_duration(),
            confirmations: u64::from(client.config().confirmation_blocks),
        })
    }
}

/// Decode revert data into a ledger error, when the contract produced one.
fn decode_ledger_revert(data: &[u8]) -> Option<LedgerError> {
    match Assessment::AssessmentErrors::abi_decode(data).ok()? {
        Assessment::AssessmentErrors::Unauthorized(_) => Some(LedgerError::Unauthorized),
        Assessment::AssessmentErrors::InsufficientBalance(e) => {
            Some(LedgerError::InsufficientBalance {
                balance: e.balance,
                amount: e.withdrawAmount,
            })
        }
    }
}

fn map_contract_err(err: alloy::contract::Error) -> ClientError {
    if let Some(data) = err.as_revert_data() {
        if let Some(ledger_err) = decode_ledger_revert(&data) {
            return ledger_err.into();
        }
    }
    ChainError::Rpc(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolError;

    #[test]
    fn test_decode_unauthorized_revert() {
        let data = Assessment::Unauthorized {}.abi_encode();
        assert_eq!(decode_ledger_revert(&data), Some(LedgerError::Unauthorized));
    }

    #[test]
    fn test_decode_insufficient_balance_revert() {
        let data = Assessment::InsufficientBalance {
            balance: U256::from(150),
            withdrawAmount: U256::from(200),
        }
        .abi_encode();

        assert_eq!(
            decode_ledger_revert(&data),
            Some(LedgerError::InsufficientBalance {
                balance: U256::from(150),
                amount: U256::from(200),
            })
        );
    }

    #[test]
    fn test_foreign_revert_data_is_not_a_ledger_error() {
        assert_eq!(decode_ledger_revert(&[0xde, 0xad, 0xbe, 0xef]), None);
    }
}

//! Shared test doubles for the session's collaborators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;

use assessment_dapp::price::source::{PriceError, PriceSource};
use assessment_dapp::wallet::provider::{WalletError, WalletProvider};

/// Browser-style wallet: present, holding one account whose authorization
/// may require an explicit request first.
#[derive(Clone)]
pub struct MockWallet {
    account: Address,
    authorized: Arc<AtomicBool>,
}

impl MockWallet {
    /// Wallet with an account that still needs a connect prompt.
    pub fn unauthorized(account: Address) -> Self {
        Self {
            account,
            authorized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Wallet whose account was authorized in an earlier visit.
    pub fn authorized(account: Address) -> Self {
        Self {
            account,
            authorized: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl WalletProvider for MockWallet {
    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        if self.authorized.load(Ordering::SeqCst) {
            Ok(vec![self.account])
        } else {
            Ok(Vec::new())
        }
    }

    async fn request_authorization(&self) -> Result<Address, WalletError> {
        self.authorized.store(true, Ordering::SeqCst);
        Ok(self.account)
    }
}

/// Wallet that refuses every authorization prompt.
#[derive(Clone)]
pub struct DenyingWallet;

impl WalletProvider for DenyingWallet {
    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(Vec::new())
    }

    async fn request_authorization(&self) -> Result<Address, WalletError> {
        Err(WalletError::AuthorizationDenied)
    }
}

/// Price source answering instantly with a fixed rate.
#[derive(Clone)]
pub struct FixedRate(pub f64);

impl PriceSource for FixedRate {
    async fn fetch_rate(&self, _asset: &str, _fiat: &str) -> Result<f64, PriceError> {
        Ok(self.0)
    }
}

/// Price source that always fails.
#[derive(Clone)]
pub struct BrokenPriceFeed;

impl PriceSource for BrokenPriceFeed {
    async fn fetch_rate(&self, _asset: &str, fiat: &str) -> Result<f64, PriceError> {
        Err(PriceError::MissingRate(fiat.to_string()))
    }
}

/// Price source that hangs long enough to observe cancellation, flagging if
/// it ever completes.
#[derive(Clone)]
pub struct SlowFeed {
    pub completed: Arc<AtomicBool>,
}

impl SlowFeed {
    pub fn new() -> Self {
        Self {
            completed: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl PriceSource for SlowFeed {
    async fn fetch_rate(&self, _asset: &str, _fiat: &str) -> Result<f64, PriceError> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.completed.store(true, Ordering::SeqCst);
        Ok(1.0)
    }
}

//! In-process ledger handle.
//!
//! Wraps the ledger in a mutex so each operation runs atomically end to end,
//! the way the on-chain execution environment runs contract calls. Used by
//! the demo's local mode and by the test suite; the session drives it through
//! the same `LedgerHandle` seam as the RPC binding.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use tokio::sync::Mutex;

use crate::ledger::state::Ledger;
use crate::session::error::ClientError;
use crate::session::traits::{LedgerConnector, LedgerHandle};

/// Handle over a shared in-process ledger, bound to one caller identity.
#[derive(Clone)]
pub struct LocalLedger {
    inner: Arc<Mutex<Ledger>>,
    caller: Address,
}

impl LedgerHandle for LocalLedger {
    async fn balance(&self) -> Result<U256, ClientError> {
        Ok(self.inner.lock().await.balance())
    }

    async fn deposit(&self, amount: U256) -> Result<(), ClientError> {
        self.inner.lock().await.deposit(self.caller, amount)?;
        Ok(())
    }

    async fn withdraw(&self, amount: U256) -> Result<(), ClientError> {
        self.inner.lock().await.withdraw(self.caller, amount)?;
        Ok(())
    }

    async fn double_balance(&self) -> Result<(), ClientError> {
        self.inner.lock().await.double_balance(self.caller)?;
        Ok(())
    }
}

/// Binds caller identities to a shared in-process ledger.
#[derive(Clone)]
pub struct LocalConnector {
    ledger: Arc<Mutex<Ledger>>,
}

impl LocalConnector {
    /// Wrap a ledger for shared access.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// The shared ledger, for observers that read the event log.
    pub fn shared(&self) -> Arc<Mutex<Ledger>> {
        self.ledger.clone()
    }
}

impl LedgerConnector for LocalConnector {
    type Handle = LocalLedger;

    async fn bind(&self, account: Address) -> Result<LocalLedger, ClientError> {
        Ok(LocalLedger {
            inner: self.ledger.clone(),
            caller: account,
        })
    }
}

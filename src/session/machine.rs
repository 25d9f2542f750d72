//! Session driver.
//!
//! # Responsibilities
//! - Acquire wallet → account → ledger binding → balance, strictly forward
//! - Re-read the balance after every confirmed mutation (no optimistic view)
//! - Own the background USD feed and cancel it with the session
//!
//! One logical thread of control: each operation is an independent
//! suspending call, and the caller drives one at a time.

use alloy::primitives::U256;

use crate::config::schema::PriceConfig;
use crate::price::source::PriceSource;
use crate::price::task::{spawn_usd_feed, UsdEstimate, UsdFeed};
use crate::session::error::ClientError;
use crate::session::state::SessionState;
use crate::session::traits::{LedgerConnector, LedgerHandle};
use crate::wallet::provider::WalletProvider;

/// Client session: one wallet, one ledger binding, one displayed balance.
pub struct Session<W, C, P>
where
    W: WalletProvider,
    C: LedgerConnector,
    P: PriceSource,
{
    wallet: Option<W>,
    connector: C,
    price: Option<P>,
    price_config: PriceConfig,
    state: SessionState,
    handle: Option<C::Handle>,
    usd: Option<UsdFeed>,
}

impl<W, C, P> Session<W, C, P>
where
    W: WalletProvider,
    C: LedgerConnector,
    P: PriceSource,
{
    /// Start a session. Discovers the wallet state and, if an account is
    /// already authorized, auto-advances to `AccountConnected` via a
    /// non-mutating account listing. Never prompts.
    pub async fn start(
        wallet: Option<W>,
        connector: C,
        price: Option<P>,
        price_config: PriceConfig,
    ) -> Self {
        let mut session = Self {
            wallet,
            connector,
            price,
            price_config,
            state: SessionState::NoWallet,
            handle: None,
            usd: None,
        };

        let Some(wallet) = session.wallet.as_ref() else {
            tracing::warn!("no wallet available; session cannot advance");
            return session;
        };

        session.state = SessionState::WalletFound;
        match wallet.accounts().await {
            Ok(accounts) => {
                if let Some(account) = accounts.first().copied() {
                    tracing::info!(account = %account, "account already authorized");
                    session.state = SessionState::AccountConnected { account };
                }
            }
            Err(e) => tracing::warn!(error = %e, "account listing failed"),
        }

        session
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current USD estimate, if a price feed is attached.
    pub fn usd_estimate(&self) -> Option<UsdEstimate> {
        self.usd.as_ref().map(UsdFeed::estimate)
    }

    /// Wait for the USD lookup to resolve or fail.
    pub async fn usd_settled(&mut self) -> Option<UsdEstimate> {
        match self.usd.as_mut() {
            Some(feed) => Some(feed.settled().await),
            None => None,
        }
    }

    /// User-initiated connect. Authorizes an account if none is yet, binds
    /// the ledger with it as signer, loads the balance, and kicks off the
    /// USD lookup. Idempotent once bound.
    pub async fn connect(&mut self) -> Result<(), ClientError> {
        let account = match self.state {
            SessionState::NoWallet => return Err(ClientError::NoWallet),
            SessionState::WalletFound => {
                let wallet = self.wallet.as_ref().ok_or(ClientError::NoWallet)?;
                let account = wallet.request_authorization().await?;
                tracing::info!(account = %account, "account authorized");
                self.state = SessionState::AccountConnected { account };
                account
            }
            SessionState::AccountConnected { account } => account,
            SessionState::LedgerBound { .. } | SessionState::BalanceLoaded { .. } => {
                return Ok(())
            }
        };

        let handle = self.connector.bind(account).await?;
        self.handle = Some(handle);
        self.state = SessionState::LedgerBound { account };
        tracing::info!(account = %account, "ledger bound");

        self.refresh().await?;

        if self.usd.is_none() {
            if let Some(source) = self.price.clone() {
                self.usd = Some(spawn_usd_feed(
                    source,
                    self.price_config.asset.clone(),
                    self.price_config.fiat.clone(),
                ));
            }
        }

        Ok(())
    }

    /// Re-read the balance from the ledger.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let account = match self.state {
            SessionState::LedgerBound { account }
            | SessionState::BalanceLoaded { account, .. } => account,
            _ => return Err(ClientError::NotConnected),
        };
        let handle = self.handle.as_ref().ok_or(ClientError::NotConnected)?;

        let balance = handle.balance().await?;
        self.state = SessionState::BalanceLoaded { account, balance };
        Ok(())
    }

    /// Deposit `amount`, suspend until confirmed, then refresh.
    pub async fn deposit(&mut self, amount: U256) -> Result<(), ClientError> {
        let handle = self.loaded_handle()?;
        handle.deposit(amount).await?;
        self.refresh().await
    }

    /// Withdraw `amount`, suspend until confirmed, then refresh.
    pub async fn withdraw(&mut self, amount: U256) -> Result<(), ClientError> {
        let handle = self.loaded_handle()?;
        handle.withdraw(amount).await?;
        self.refresh().await
    }

    /// Double the balance, suspend until confirmed, then refresh.
    pub async fn double_balance(&mut self) -> Result<(), ClientError> {
        let handle = self.loaded_handle()?;
        handle.double_balance().await?;
        self.refresh().await
    }

    /// Mutations are only offered once a balance is on display.
    fn loaded_handle(&self) -> Result<&C::Handle, ClientError> {
        match self.state {
            SessionState::BalanceLoaded { .. } => {
                self.handle.as_ref().ok_or(ClientError::NotConnected)
            }
            _ => Err(ClientError::NotConnected),
        }
    }
}

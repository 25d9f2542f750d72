//! Client session state machine scenarios.

mod common;

use std::sync::atomic::Ordering;
use std::time::Duration;

use alloy::primitives::{Address, U256};

use assessment_dapp::config::schema::PriceConfig;
use assessment_dapp::ledger::local::LocalConnector;
use assessment_dapp::ledger::state::Ledger;
use assessment_dapp::ledger::types::LedgerError;
use assessment_dapp::price::task::UsdEstimate;
use assessment_dapp::session::error::ClientError;
use assessment_dapp::session::machine::Session;
use assessment_dapp::session::state::SessionState;
use assessment_dapp::view;

use common::{BrokenPriceFeed, DenyingWallet, FixedRate, MockWallet, SlowFeed};

fn owner() -> Address {
    Address::repeat_byte(0x0a)
}

fn connector_with(owner: Address, balance: u64) -> LocalConnector {
    LocalConnector::new(Ledger::new(owner, U256::from(balance)))
}

#[tokio::test]
async fn no_wallet_is_terminal() {
    let mut session = Session::start(
        None::<MockWallet>,
        connector_with(owner(), 100),
        None::<FixedRate>,
        PriceConfig::default(),
    )
    .await;

    assert_eq!(*session.state(), SessionState::NoWallet);
    assert!(matches!(session.connect().await, Err(ClientError::NoWallet)));
    assert!(matches!(
        session.deposit(U256::from(1)).await,
        Err(ClientError::NotConnected)
    ));
}

#[tokio::test]
async fn previously_authorized_account_auto_advances() {
    let session = Session::start(
        Some(MockWallet::authorized(owner())),
        connector_with(owner(), 100),
        None::<FixedRate>,
        PriceConfig::default(),
    )
    .await;

    assert_eq!(
        *session.state(),
        SessionState::AccountConnected { account: owner() }
    );
}

#[tokio::test]
async fn connect_reaches_balance_loaded() {
    let mut session = Session::start(
        Some(MockWallet::unauthorized(owner())),
        connector_with(owner(), 100),
        Some(FixedRate(2000.0)),
        PriceConfig::default(),
    )
    .await;

    // Nothing authorized yet, so discovery stops at WalletFound.
    assert_eq!(*session.state(), SessionState::WalletFound);

    session.connect().await.unwrap();
    assert_eq!(
        *session.state(),
        SessionState::BalanceLoaded {
            account: owner(),
            balance: U256::from(100),
        }
    );

    assert_eq!(session.usd_settled().await, Some(UsdEstimate::Ready(2000.0)));
}

#[tokio::test]
async fn denied_authorization_stays_put() {
    let mut session = Session::start(
        Some(DenyingWallet),
        connector_with(owner(), 100),
        None::<FixedRate>,
        PriceConfig::default(),
    )
    .await;

    assert!(matches!(session.connect().await, Err(ClientError::Wallet(_))));
    assert_eq!(*session.state(), SessionState::WalletFound);
}

#[tokio::test]
async fn mutations_refresh_from_the_ledger() {
    let one_eth = view::eth_to_wei(1);
    let mut session = Session::start(
        Some(MockWallet::authorized(owner())),
        LocalConnector::new(Ledger::new(owner(), view::eth_to_wei(5))),
        None::<FixedRate>,
        PriceConfig::default(),
    )
    .await;
    session.connect().await.unwrap();

    session.deposit(one_eth).await.unwrap();
    assert_eq!(
        *session.state(),
        SessionState::BalanceLoaded {
            account: owner(),
            balance: view::eth_to_wei(6),
        }
    );

    session.withdraw(one_eth).await.unwrap();
    assert_eq!(
        *session.state(),
        SessionState::BalanceLoaded {
            account: owner(),
            balance: view::eth_to_wei(5),
        }
    );

    session.double_balance().await.unwrap();
    assert_eq!(
        *session.state(),
        SessionState::BalanceLoaded {
            account: owner(),
            balance: view::eth_to_wei(10),
        }
    );
}

#[tokio::test]
async fn rejected_mutation_keeps_pre_mutation_balance() {
    let stranger = Address::repeat_byte(0x0b);
    let mut session = Session::start(
        Some(MockWallet::authorized(stranger)),
        connector_with(owner(), 100),
        None::<FixedRate>,
        PriceConfig::default(),
    )
    .await;

    // Reads are open to anyone, so the stranger still reaches BalanceLoaded.
    session.connect().await.unwrap();

    let err = session.deposit(U256::from(1)).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Ledger(LedgerError::Unauthorized)
    ));
    assert_eq!(
        *session.state(),
        SessionState::BalanceLoaded {
            account: stranger,
            balance: U256::from(100),
        }
    );
}

#[tokio::test]
async fn overdraw_surfaces_diagnostics() {
    let mut session = Session::start(
        Some(MockWallet::authorized(owner())),
        connector_with(owner(), 100),
        None::<FixedRate>,
        PriceConfig::default(),
    )
    .await;
    session.connect().await.unwrap();

    let err = session.withdraw(U256::from(200)).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Ledger(LedgerError::InsufficientBalance { balance, amount })
            if balance == U256::from(100) && amount == U256::from(200)
    ));
}

#[tokio::test]
async fn failed_price_lookup_leaves_usd_loading() {
    let mut session = Session::start(
        Some(MockWallet::authorized(owner())),
        connector_with(owner(), 100),
        Some(BrokenPriceFeed),
        PriceConfig::default(),
    )
    .await;
    session.connect().await.unwrap();

    // The balance flow is unaffected by the dead price collaborator.
    assert!(matches!(
        session.state(),
        SessionState::BalanceLoaded { .. }
    ));

    assert_eq!(session.usd_settled().await, Some(UsdEstimate::Failed));

    // The rendered page still shows the balance, with the USD field stuck
    // on the loading text.
    let page = view::render(session.state(), session.usd_estimate().as_ref());
    assert!(page.contains("ETH"));
    assert!(page.contains("loading"));
}

#[tokio::test]
async fn dropping_the_session_cancels_the_price_task() {
    let feed = SlowFeed::new();
    let completed = feed.completed.clone();

    let mut session = Session::start(
        Some(MockWallet::authorized(owner())),
        connector_with(owner(), 100),
        Some(feed),
        PriceConfig::default(),
    )
    .await;
    session.connect().await.unwrap();
    drop(session);

    tokio::time::sleep(Duration::from_millis(120)).await;
    assert!(!completed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn connect_is_idempotent_once_bound() {
    let mut session = Session::start(
        Some(MockWallet::authorized(owner())),
        connector_with(owner(), 100),
        None::<FixedRate>,
        PriceConfig::default(),
    )
    .await;

    session.connect().await.unwrap();
    let before = session.state().clone();
    session.connect().await.unwrap();
    assert_eq!(*session.state(), before);
}

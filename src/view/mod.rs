//! Console rendering of the session.
//!
//! One render function per session state, selected by matching the state
//! enum. The view never inspects optional fields to decide what to show.

use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, U256};

use crate::price::task::UsdEstimate;
use crate::session::state::SessionState;

const HEADER: &str = "=== Assessment console ===";

/// Render the full page for the given state.
pub fn render(state: &SessionState, usd: Option<&UsdEstimate>) -> String {
    match state {
        SessionState::NoWallet => no_wallet(),
        SessionState::WalletFound => wallet_found(),
        SessionState::AccountConnected { account } => account_connected(*account),
        SessionState::LedgerBound { account } => ledger_bound(*account),
        SessionState::BalanceLoaded { account, balance } => {
            balance_loaded(*account, *balance, usd)
        }
    }
}

fn no_wallet() -> String {
    format!(
        "{HEADER}\n\
         No wallet found. Set {} to a signing key and restart.",
        crate::wallet::signer::PRIVATE_KEY_ENV_VAR
    )
}

fn wallet_found() -> String {
    format!(
        "{HEADER}\n\
         Wallet found, no account authorized yet.\n\
         Type `connect` to authorize an account and open the ledger."
    )
}

fn account_connected(account: Address) -> String {
    format!(
        "{HEADER}\n\
         Account: {account}\n\
         Type `connect` to bind the ledger."
    )
}

fn ledger_bound(account: Address) -> String {
    format!(
        "{HEADER}\n\
         Account: {account}\n\
         Ledger bound, loading balance..."
    )
}

fn balance_loaded(account: Address, balance: U256, usd: Option<&UsdEstimate>) -> String {
    let mut out = format!(
        "{HEADER}\n\
         Account: {account}\n\
         Balance: {} ETH",
        format_ether(balance)
    );
    if let Some(line) = usd_line(balance, usd) {
        out.push('\n');
        out.push_str(&line);
    }
    out.push_str("\nActions: deposit (1 ETH) | withdraw (1 ETH) | double | refresh | quit");
    out
}

fn usd_line(balance: U256, usd: Option<&UsdEstimate>) -> Option<String> {
    let estimate = usd?;
    Some(match estimate {
        UsdEstimate::Ready(rate) => format!("Value:   {:.2} USD", eth_value(balance) * rate),
        // TODO: render a distinct indicator for a failed lookup instead of
        // leaving the field on the loading text.
        UsdEstimate::Pending | UsdEstimate::Failed => "Value:   loading...".to_string(),
    })
}

/// Wei → ETH as an f64, for the display-only fiat estimate. Accumulates the
/// limbs directly; precision beyond f64's mantissa is lost, but there is no
/// fallible path that could misreport a balance as zero.
fn eth_value(balance: U256) -> f64 {
    let base = 2f64.powi(64);
    let mut wei = 0.0f64;
    for limb in balance.as_limbs().iter().rev() {
        wei = wei * base + *limb as f64;
    }
    wei / 1e18
}

/// Whole-ETH amount in wei.
pub fn eth_to_wei(eth: u64) -> U256 {
    U256::from(eth) * U256::from(1_000_000_000_000_000_000u64)
}

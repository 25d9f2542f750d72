//! Interactive demo binary.
//!
//! Wires a session against either the in-process ledger or a deployed
//! contract, then drives it from stdin one command at a time.

use std::io::Write as _;
use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assessment_dapp::chain::binding::RpcConnector;
use assessment_dapp::config::loader::load_config;
use assessment_dapp::config::schema::{AppConfig, ChainMode};
use assessment_dapp::ledger::local::LocalConnector;
use assessment_dapp::ledger::state::Ledger;
use assessment_dapp::price::source::{HttpPriceSource, PriceSource};
use assessment_dapp::session::machine::Session;
use assessment_dapp::session::state::SessionState;
use assessment_dapp::session::traits::LedgerConnector;
use assessment_dapp::view;
use assessment_dapp::wallet::provider::WalletProvider;
use assessment_dapp::wallet::signer::EnvKeyWallet;

#[derive(Parser, Debug)]
#[command(name = "assessment", about = "Owner-gated balance ledger console")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "assessment.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assessment_dapp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        tracing::info!(path = %cli.config.display(), "no config file, using defaults");
        AppConfig::default()
    };

    tracing::info!(
        mode = ?config.chain.mode,
        price_enabled = config.price.enabled,
        "configuration loaded"
    );

    let Some(wallet) = EnvKeyWallet::discover()? else {
        println!("{}", view::render(&SessionState::NoWallet, None));
        return Ok(());
    };

    let price = if config.price.enabled {
        Some(HttpPriceSource::new(&config.price)?)
    } else {
        None
    };

    match config.chain.mode {
        ChainMode::Local => {
            let owner = wallet.address();
            let initial = view::eth_to_wei(config.chain.initial_balance_eth);
            let connector = LocalConnector::new(Ledger::new(owner, initial));
            let session =
                Session::start(Some(wallet), connector, price, config.price.clone()).await;
            run(session).await
        }
        ChainMode::Rpc => {
            let connector = RpcConnector::new(config.chain.clone(), wallet.signer());
            let session =
                Session::start(Some(wallet), connector, price, config.price.clone()).await;
            run(session).await
        }
    }
}

async fn run<W, C, P>(mut session: Session<W, C, P>) -> Result<(), Box<dyn std::error::Error>>
where
    W: WalletProvider,
    C: LedgerConnector,
    P: PriceSource,
{
    let one_eth = view::eth_to_wei(1);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_screen(&session);
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let outcome = match line.trim() {
            "connect" => session.connect().await,
            "deposit" => session.deposit(one_eth).await,
            "withdraw" => session.withdraw(one_eth).await,
            "double" => session.double_balance().await,
            "refresh" => session.refresh().await,
            "quit" | "exit" => break,
            "" => Ok(()),
            other => {
                println!("unknown command '{other}'; try connect, deposit, withdraw, double, refresh, quit");
                Ok(())
            }
        };
        if let Err(e) = outcome {
            println!("error: {e}");
        }
        print_screen(&session);
    }

    Ok(())
}

fn print_screen<W, C, P>(session: &Session<W, C, P>)
where
    W: WalletProvider,
    C: LedgerConnector,
    P: PriceSource,
{
    let usd = session.usd_estimate();
    println!("{}", view::render(session.state(), usd.as_ref()));
}

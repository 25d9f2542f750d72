//! Assessment: an owner-gated balance ledger with a console client session.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                CLIENT SESSION                 │
//!                    │                                               │
//!   stdin commands   │  ┌────────┐   ┌─────────┐   ┌─────────────┐  │
//!   ─────────────────┼─▶│  view  │──▶│ session │──▶│  connector  │  │
//!                    │  │ render │   │ machine │   │ local / rpc │  │
//!                    │  └────────┘   └────┬────┘   └──────┬──────┘  │
//!                    │                    │               │         │
//!                    │              ┌─────▼─────┐   ┌─────▼──────┐  │
//!                    │              │  wallet   │   │   ledger   │  │
//!                    │              │ provider  │   │   handle   │  │
//!                    │              └───────────┘   └────────────┘  │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │   Cross-Cutting: config | price feed    │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

pub mod chain;
pub mod config;
pub mod ledger;
pub mod price;
pub mod session;
pub mod view;
pub mod wallet;

pub use config::schema::AppConfig;
pub use ledger::state::Ledger;
pub use session::machine::Session;
pub use session::state::SessionState;

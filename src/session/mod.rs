//! Client session subsystem.
//!
//! # Data Flow
//! ```text
//! wallet provider (accounts, authorization)
//!     → machine.rs (forward-only state machine)
//!     → ledger connector (bind account → callable handle)
//!     → ledger handle (read balance, submit mutations)
//!     → price feed (best-effort USD estimate, background task)
//! ```
//!
//! # Design Decisions
//! - State is an explicit enum, not a set of optional fields; every view
//!   decision matches on one variant
//! - No backward transition except full reset (drop and rebuild)
//! - No optimistic balance update; the displayed balance is re-read from the
//!   ledger after every confirmed mutation

pub mod error;
pub mod machine;
pub mod state;
pub mod traits;

pub use error::ClientError;
pub use machine::Session;
pub use state::SessionState;

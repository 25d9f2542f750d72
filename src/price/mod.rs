//! Price collaborator.
//!
//! # Data Flow
//! ```text
//! session connect
//!     → task.rs (spawn one-shot background lookup, watch channel out)
//!     → source.rs (HTTP GET quote endpoint, fiat symbol → rate map)
//!     → view (USD line; stays on the loading text until a rate lands)
//! ```
//!
//! Best-effort by design: a failed lookup degrades the display only and
//! never blocks the balance flow. No retry, no cache, no fallback provider.

pub mod source;
pub mod task;

pub use source::{HttpPriceSource, PriceError, PriceSource};
pub use task::{spawn_usd_feed, UsdEstimate, UsdFeed};

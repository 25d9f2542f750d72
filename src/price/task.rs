//! Background USD estimate task.
//!
//! The lookup runs once per session, detached from the balance flow. The
//! feed owns the task handle and aborts it on drop, so a torn-down session
//! never writes into stale display state.

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::price::source::PriceSource;

/// Display state of the fiat estimate.
#[derive(Debug, Clone, PartialEq)]
pub enum UsdEstimate {
    /// Lookup still in flight; the view shows a loading indicator.
    Pending,
    /// Rate resolved; one asset unit is worth this many fiat units.
    Ready(f64),
    /// Lookup failed. The view currently renders this like `Pending`.
    Failed,
}

/// Receiving side of the estimate, owned by the session.
pub struct UsdFeed {
    rx: watch::Receiver<UsdEstimate>,
    task: JoinHandle<()>,
}

impl UsdFeed {
    /// Current estimate without waiting.
    pub fn estimate(&self) -> UsdEstimate {
        self.rx.borrow().clone()
    }

    /// Wait until the lookup has resolved or failed.
    pub async fn settled(&mut self) -> UsdEstimate {
        loop {
            let current = self.rx.borrow().clone();
            if current != UsdEstimate::Pending {
                return current;
            }
            if self.rx.changed().await.is_err() {
                return self.rx.borrow().clone();
            }
        }
    }
}

impl Drop for UsdFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the one-shot lookup and hand back the feed.
pub fn spawn_usd_feed<P: PriceSource>(source: P, asset: String, fiat: String) -> UsdFeed {
    let (tx, rx) = watch::channel(UsdEstimate::Pending);

    let task = tokio::spawn(async move {
        match source.fetch_rate(&asset, &fiat).await {
            Ok(rate) => {
                tracing::info!(asset = %asset, fiat = %fiat, rate, "price lookup resolved");
                let _ = tx.send(UsdEstimate::Ready(rate));
            }
            Err(e) => {
                tracing::warn!(
                    asset = %asset,
                    fiat = %fiat,
                    error = %e,
                    "price lookup failed; fiat field stays on the loading indicator"
                );
                let _ = tx.send(UsdEstimate::Failed);
            }
        }
    });

    UsdFeed { rx, task }
}

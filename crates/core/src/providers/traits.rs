use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::snapshot::PortfolioSnapshot;

/// Trait abstraction for anything that can supply a portfolio snapshot.
///
/// The library never fetches data on its own. The host application picks a
/// provider and calls [`crate::PortfolioDashboard::refresh`] whenever it
/// wants a new snapshot.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SnapshotProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Produce a decoded, validated snapshot.
    async fn fetch_snapshot(&self) -> Result<PortfolioSnapshot, CoreError>;
}

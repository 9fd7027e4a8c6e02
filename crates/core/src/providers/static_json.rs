use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::snapshot::PortfolioSnapshot;
use crate::services::snapshot_service::SnapshotService;
use super::traits::SnapshotProvider;

/// Serves a snapshot from JSON text held in memory.
///
/// Useful for WASM hosts that already have the payload, for bundled demo
/// data, and for tests.
pub struct StaticJsonProvider {
    json: String,
    snapshot_service: SnapshotService,
}

impl StaticJsonProvider {
    pub fn new(json: impl Into<String>) -> Self {
        Self {
            json: json.into(),
            snapshot_service: SnapshotService::new(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SnapshotProvider for StaticJsonProvider {
    fn name(&self) -> &str {
        "StaticJson"
    }

    async fn fetch_snapshot(&self) -> Result<PortfolioSnapshot, CoreError> {
        self.snapshot_service.parse_snapshot(&self.json)
    }
}

use std::path::PathBuf;

use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::snapshot::PortfolioSnapshot;
use crate::services::snapshot_service::SnapshotService;
use super::traits::SnapshotProvider;

/// Reads a snapshot from a JSON file on disk (native only, not WASM).
///
/// The file is re-read on every fetch, so a refresh picks up edits.
pub struct JsonFileProvider {
    path: PathBuf,
    snapshot_service: SnapshotService,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot_service: SnapshotService::new(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotProvider for JsonFileProvider {
    fn name(&self) -> &str {
        "JsonFile"
    }

    async fn fetch_snapshot(&self) -> Result<PortfolioSnapshot, CoreError> {
        let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::FileIO(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        self.snapshot_service.parse_snapshot(&json)
    }
}

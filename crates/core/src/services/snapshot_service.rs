use std::collections::HashSet;

use log::info;

use crate::errors::CoreError;
use crate::models::calendar::{month_index, normalize_month_label};
use crate::models::snapshot::PortfolioSnapshot;

/// Decodes and checks portfolio snapshots.
///
/// The payload spells months out in full ("January"); every label is
/// rewritten to its 3-letter form before the snapshot is handed to the
/// rest of the library.
pub struct SnapshotService;

impl SnapshotService {
    pub fn new() -> Self {
        Self
    }

    /// Parse a snapshot from JSON, normalize month labels and validate it.
    pub fn parse_snapshot(&self, json: &str) -> Result<PortfolioSnapshot, CoreError> {
        let mut snapshot: PortfolioSnapshot = serde_json::from_str(json)?;
        self.normalize_months(&mut snapshot)?;
        self.validate_snapshot(&snapshot)?;
        info!(
            "Loaded portfolio snapshot for '{}' with {} holdings",
            snapshot.company_info.name,
            snapshot.holdings.len()
        );
        Ok(snapshot)
    }

    /// Rewrite every price-history month label to its 3-letter form.
    pub fn normalize_months(&self, snapshot: &mut PortfolioSnapshot) -> Result<(), CoreError> {
        for holding in &mut snapshot.holdings {
            for point in holding.price_history.iter_mut().flatten() {
                let label = normalize_month_label(&point.month).ok_or_else(|| {
                    CoreError::ValidationError(format!(
                        "Holding {} has unknown month label '{}'",
                        holding.id, point.month
                    ))
                })?;
                point.month = label.to_string();
            }
        }
        Ok(())
    }

    /// Check snapshot invariants:
    /// - holding ids are unique
    /// - shares held are non-negative
    /// - each price history is in calendar order with no repeated month
    pub fn validate_snapshot(&self, snapshot: &PortfolioSnapshot) -> Result<(), CoreError> {
        let mut ids = HashSet::new();

        for holding in &snapshot.holdings {
            if !ids.insert(holding.id.as_str()) {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate holding id '{}'",
                    holding.id
                )));
            }

            if holding.shares_held < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Holding {} has negative shares held ({})",
                    holding.id, holding.shares_held
                )));
            }

            let mut previous: Option<usize> = None;
            for point in holding.history() {
                let idx = month_index(&point.month).ok_or_else(|| {
                    CoreError::ValidationError(format!(
                        "Holding {} has unknown month label '{}'",
                        holding.id, point.month
                    ))
                })?;
                if previous.is_some_and(|p| idx <= p) {
                    return Err(CoreError::ValidationError(format!(
                        "Holding {} price history is out of calendar order at '{}'",
                        holding.id, point.month
                    )));
                }
                previous = Some(idx);
            }
        }

        Ok(())
    }

    /// Serialize a snapshot back to pretty JSON.
    pub fn to_json(&self, snapshot: &PortfolioSnapshot) -> Result<String, CoreError> {
        serde_json::to_string_pretty(snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))
    }
}

impl Default for SnapshotService {
    fn default() -> Self {
        Self::new()
    }
}

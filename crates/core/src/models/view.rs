use serde::{Deserialize, Serialize};

use super::aggregate::{Category, CategoryAggregate, MonthlyTotal};
use super::dividend::DividendEstimate;
use super::holding::Holding;
use super::snapshot::PortfolioSummary;
use super::sort::SortState;
use super::window::Window;

/// One slice of an allocation pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub name: String,
    pub market_value: f64,
    /// Percent of the filtered holdings' total market value
    pub share_pct: f64,
}

/// Data behind the overview page.
///
/// The series and both allocations follow the active filter; the
/// summary KPIs are shown as supplied by the snapshot. Monetary figures
/// are labelled with `currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub currency: String,
    pub summary: PortfolioSummary,
    pub window: Window,
    pub series: Vec<MonthlyTotal>,
    pub sector_allocation: Vec<AllocationSlice>,
    pub country_allocation: Vec<AllocationSlice>,
}

/// A row of the sector or country breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    #[serde(flatten)]
    pub aggregate: CategoryAggregate,
    pub share_pct: f64,
}

/// Data behind the sector and country pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownView {
    pub category: Category,
    pub rows: Vec<BreakdownRow>,
    pub total_market_value: f64,
}

/// Filtered and sorted rows of the holdings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingsTable {
    pub sort: SortState,
    pub rows: Vec<Holding>,
}

impl HoldingsTable {
    /// True when the filter left nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Data behind the per-stock page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDetail {
    pub holding: Holding,
    pub dividend: DividendEstimate,
}

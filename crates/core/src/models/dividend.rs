use serde::{Deserialize, Serialize};

use super::holding::PricePoint;

/// Dividend figures for the stock-detail view, derived from the
/// holding's current price and annual yield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendEstimate {
    /// `current_price × dividend_yield / 100`
    pub annual_per_share: f64,

    /// One quarter of the annual amount
    pub quarterly_per_share: f64,

    /// Price points at payment months, for chart markers. Months the
    /// history has no point for are skipped.
    pub payment_markers: Vec<PricePoint>,
}

use crate::models::dividend::DividendEstimate;
use crate::models::holding::{Holding, PricePoint};

/// Estimates dividend income for a single holding.
pub struct DividendService;

impl DividendService {
    pub fn new() -> Self {
        Self
    }

    /// Estimate dividends for `holding`, marking `payment_months`.
    /// A holding without a yield gets a zero estimate.
    pub fn estimate_dividends(&self, holding: &Holding, payment_months: &[String]) -> DividendEstimate {
        let yield_pct = holding.dividend_yield.unwrap_or(0.0);
        let annual_per_share = holding.current_price * (yield_pct / 100.0);

        let payment_markers = payment_months
            .iter()
            .filter_map(|month| {
                holding
                    .price_at(month)
                    .map(|value| PricePoint::new(month.clone(), value))
            })
            .collect();

        DividendEstimate {
            annual_per_share,
            quarterly_per_share: annual_per_share / 4.0,
            payment_markers,
        }
    }
}

impl Default for DividendService {
    fn default() -> Self {
        Self::new()
    }
}

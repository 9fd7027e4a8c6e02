use crate::errors::CoreError;
use crate::models::aggregate::{Category, CategoryAggregate};
use crate::models::filter::Filter;
use crate::models::holding::Holding;
use crate::models::snapshot::PortfolioSnapshot;
use crate::models::sort::SortState;
use crate::models::view::{
    AllocationSlice, BreakdownRow, BreakdownView, DashboardView, HoldingsTable, StockDetail,
};
use crate::models::window::Window;
use crate::services::aggregator_service::AggregatorService;
use crate::services::dividend_service::DividendService;

/// Builds the read model of each dashboard page from a snapshot and the
/// current filter, sort and window.
///
/// Every page except the stock detail works on the filtered holdings.
/// The stock detail looks ids up in the full collection so a link keeps
/// working after the filter changes.
pub struct ViewService {
    aggregator: AggregatorService,
    dividend_service: DividendService,
}

impl ViewService {
    pub fn new() -> Self {
        Self {
            aggregator: AggregatorService::new(),
            dividend_service: DividendService::new(),
        }
    }

    pub fn dashboard(
        &self,
        snapshot: &PortfolioSnapshot,
        filter: &Filter,
        window: Window,
        currency: &str,
    ) -> DashboardView {
        let filtered = self.aggregator.filter_holdings(&snapshot.holdings, filter);

        DashboardView {
            currency: currency.to_string(),
            summary: snapshot.portfolio_summary.clone(),
            window,
            series: self.aggregator.series_for_window(filtered.iter().copied(), window),
            sector_allocation: self.allocation(&filtered, Category::Sector),
            country_allocation: self.allocation(&filtered, Category::Country),
        }
    }

    pub fn breakdown(&self, snapshot: &PortfolioSnapshot, filter: &Filter, category: Category) -> BreakdownView {
        let filtered = self.aggregator.filter_holdings(&snapshot.holdings, filter);
        let aggregates = self.aggregator.breakdown(filtered, category);
        let total_market_value = total_value(&aggregates);

        let rows = aggregates
            .into_iter()
            .map(|aggregate| BreakdownRow {
                share_pct: aggregate.share_pct(total_market_value),
                aggregate,
            })
            .collect();

        BreakdownView {
            category,
            rows,
            total_market_value,
        }
    }

    pub fn holdings_table(&self, snapshot: &PortfolioSnapshot, filter: &Filter, sort: SortState) -> HoldingsTable {
        let filtered = self.aggregator.filter_holdings(&snapshot.holdings, filter);
        let rows = self
            .aggregator
            .sort_holdings(filtered, sort.key, sort.direction)
            .into_iter()
            .cloned()
            .collect();

        HoldingsTable { sort, rows }
    }

    pub fn stock_detail(
        &self,
        snapshot: &PortfolioSnapshot,
        id: &str,
        dividend_months: &[String],
    ) -> Result<StockDetail, CoreError> {
        let holding = self
            .aggregator
            .find_holding(&snapshot.holdings, id)
            .ok_or_else(|| CoreError::HoldingNotFound(id.to_string()))?;

        Ok(StockDetail {
            holding: holding.clone(),
            dividend: self.dividend_service.estimate_dividends(holding, dividend_months),
        })
    }

    fn allocation(&self, holdings: &[&Holding], category: Category) -> Vec<AllocationSlice> {
        let aggregates = self.aggregator.breakdown(holdings.iter().copied(), category);
        let total = total_value(&aggregates);

        aggregates
            .into_iter()
            .map(|a| AllocationSlice {
                share_pct: a.share_pct(total),
                name: a.name,
                market_value: a.market_value,
            })
            .collect()
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}

fn total_value(aggregates: &[CategoryAggregate]) -> f64 {
    aggregates.iter().map(|a| a.market_value).sum()
}

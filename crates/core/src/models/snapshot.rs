use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Company the portfolio belongs to. Extra payload fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Portfolio-level KPIs computed upstream and shown as supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSummary {
    pub total_market_value: f64,
    pub total_unrealized_pnl: f64,
    /// Year-to-date return in percent
    pub ytd_return: f64,
    pub number_of_holdings: usize,
}

/// Everything loaded in one refresh cycle.
///
/// Treated as immutable until the next refresh replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub company_info: CompanyInfo,

    #[serde(default)]
    pub portfolio_summary: PortfolioSummary,

    #[serde(default)]
    pub holdings: Vec<Holding>,
}

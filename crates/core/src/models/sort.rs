use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Column a holdings table can be sorted by.
///
/// Wire names match the holding's JSON field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Symbol,
    Sector,
    Country,
    MarketValue,
    #[serde(rename = "unrealized_pnl")]
    UnrealizedPnl,
    #[serde(rename = "unrealized_pnl_percent")]
    UnrealizedPnlPercent,
    #[serde(rename = "weight_in_portfolio")]
    Weight,
    SharesHeld,
    CurrentPrice,
    AvgCostBasis,
}

impl SortKey {
    #[must_use]
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            SortKey::Name | SortKey::Symbol | SortKey::Sector | SortKey::Country
        )
    }

    /// Direction applied the first time a column is selected:
    /// text columns start A→Z, numeric columns start largest-first.
    #[must_use]
    pub fn default_direction(self) -> SortDirection {
        if self.is_numeric() {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    /// Read this column's value from a holding.
    pub fn value_of(self, holding: &Holding) -> SortValue<'_> {
        match self {
            SortKey::Name => SortValue::Text(Some(&holding.name)),
            SortKey::Symbol => SortValue::Text(Some(&holding.symbol)),
            SortKey::Sector => SortValue::Text(holding.sector.as_deref()),
            SortKey::Country => SortValue::Text(holding.country.as_deref()),
            SortKey::MarketValue => SortValue::Number(holding.market_value),
            SortKey::UnrealizedPnl => SortValue::Number(holding.unrealized_pnl),
            SortKey::UnrealizedPnlPercent => SortValue::Number(holding.unrealized_pnl_percent),
            SortKey::Weight => SortValue::Number(holding.weight_in_portfolio),
            SortKey::SharesHeld => SortValue::Number(holding.shares_held),
            SortKey::CurrentPrice => SortValue::Number(holding.current_price),
            SortKey::AvgCostBasis => SortValue::Number(holding.avg_cost_basis),
        }
    }
}

/// A column value extracted for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(Option<&'a str>),
}

impl SortValue<'_> {
    /// Numbers compare numerically (NaN ties); everything else compares
    /// as lowercased text, with a missing value treated as empty.
    pub fn compare(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
            }
            _ => self.as_text().cmp(&other.as_text()),
        }
    }

    fn as_text(&self) -> String {
        match self {
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(t) => t.unwrap_or("").to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort column and direction of the holdings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Column-header click: the same key flips direction, a new key
    /// starts at that key's default direction.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, key.default_direction())
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortKey::MarketValue, SortDirection::Desc)
    }
}

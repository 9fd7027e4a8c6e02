use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Categorical field a breakdown groups holdings by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sector,
    Country,
}

impl Category {
    /// Field accessor for this category. `None` when the holding lacks it.
    pub fn value_of(self, holding: &Holding) -> Option<&str> {
        match self {
            Category::Sector => holding.sector.as_deref(),
            Category::Country => holding.country.as_deref(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Sector => write!(f, "Sector"),
            Category::Country => write!(f, "Country"),
        }
    }
}

/// Summed market value and member count of one category value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    /// The category value (e.g., "Energy", "United States")
    pub name: String,
    pub market_value: f64,
    pub count: usize,
}

impl CategoryAggregate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            market_value: 0.0,
            count: 0,
        }
    }

    pub fn add(&mut self, holding: &Holding) {
        self.market_value += holding.market_value;
        self.count += 1;
    }

    /// This aggregate's percent of `total`; 0 when `total` is not positive.
    #[must_use]
    pub fn share_pct(&self, total: f64) -> f64 {
        if total > 0.0 {
            (self.market_value / total) * 100.0
        } else {
            0.0
        }
    }
}

/// Total value of the (filtered) holdings at one month.
///
/// Computed as the sum of `shares_held × price_at_month`, i.e. assuming
/// every position was the same size all year. This approximates a
/// portfolio valuation; it is not a lot-accurate NAV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub value: f64,
}

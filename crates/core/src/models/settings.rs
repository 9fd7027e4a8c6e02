use serde::{Deserialize, Serialize};

use super::calendar::QUARTERLY_PAYMENT_MONTHS;
use super::sort::SortState;
use super::window::Window;

/// User-configurable dashboard settings.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a
/// valid settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Currency portfolio-level figures are reported in (e.g., "USD").
    pub display_currency: String,

    /// Window the portfolio value series opens with.
    pub default_window: Window,

    /// Sort the holdings table opens with.
    pub default_sort: SortState,

    /// Months in which dividend payments are marked on the stock chart.
    pub dividend_months: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: "USD".to_string(),
            default_window: Window::default(),
            default_sort: SortState::default(),
            dividend_months: QUARTERLY_PAYMENT_MONTHS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, crate::errors::CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Trailing number of months shown in the portfolio value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Window {
    ThreeMonths,
    SixMonths,
    #[default]
    TwelveMonths,
}

impl Window {
    pub const ALL: [Window; 3] = [Window::TwelveMonths, Window::SixMonths, Window::ThreeMonths];

    #[must_use]
    pub fn months(self) -> usize {
        match self {
            Window::ThreeMonths => 3,
            Window::SixMonths => 6,
            Window::TwelveMonths => 12,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Window::ThreeMonths => "3M",
            Window::SixMonths => "6M",
            Window::TwelveMonths => "12M",
        }
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Window {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "3M" => Ok(Window::ThreeMonths),
            "6M" => Ok(Window::SixMonths),
            "12M" => Ok(Window::TwelveMonths),
            other => Err(CoreError::ValidationError(format!(
                "Unknown window '{other}': expected one of 3M, 6M, 12M"
            ))),
        }
    }
}

impl TryFrom<String> for Window {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Window> for String {
    fn from(value: Window) -> Self {
        value.label().to_string()
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// A single monthly price data point (month label → price).
///
/// Month labels are the 3-letter form (`"Jan"`, `"Feb"`, ...) once a
/// snapshot has been loaded through `snapshot_service::parse_snapshot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub month: String,
    pub value: f64,
}

impl PricePoint {
    pub fn new(month: impl Into<String>, value: f64) -> Self {
        Self {
            month: month.into(),
            value,
        }
    }
}

/// One position in the portfolio (a single security).
///
/// Holdings are immutable for the lifetime of a snapshot. Every derived
/// view (filters, breakdowns, sorted tables) is recomputed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique, stable identifier. Accepted from JSON as a number or a string.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Ticker symbol (e.g., "AAPL")
    pub symbol: String,

    /// Display name (e.g., "Apple Inc.")
    pub name: String,

    /// Sector category. `None` keeps the holding out of sector grouping.
    #[serde(default)]
    pub sector: Option<String>,

    /// Country category. `None` keeps the holding out of country grouping.
    #[serde(default)]
    pub country: Option<String>,

    /// Currency code the per-share figures are quoted in
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub shares_held: f64,

    #[serde(default)]
    pub avg_cost_basis: f64,

    #[serde(default)]
    pub current_price: f64,

    #[serde(default)]
    pub market_value: f64,

    #[serde(default)]
    pub unrealized_pnl: f64,

    #[serde(default)]
    pub unrealized_pnl_percent: f64,

    /// Market value as a percent of total portfolio market value
    #[serde(default)]
    pub weight_in_portfolio: f64,

    /// Free-text market capitalisation (e.g., "2.9T")
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub market_cap: Option<String>,

    #[serde(default)]
    pub pe_ratio: Option<f64>,

    /// Annual dividend yield in percent
    #[serde(default)]
    pub dividend_yield: Option<f64>,

    /// Monthly closing prices, in calendar order, at most 12 entries.
    /// `None` when the payload has no history at all; an empty list is kept
    /// as `Some(vec![])`.
    #[serde(rename = "price_history_2024", alias = "price_history", default)]
    pub price_history: Option<Vec<PricePoint>>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Holding {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            sector: None,
            country: None,
            currency: default_currency(),
            shares_held: 0.0,
            avg_cost_basis: 0.0,
            current_price: 0.0,
            market_value: 0.0,
            unrealized_pnl: 0.0,
            unrealized_pnl_percent: 0.0,
            weight_in_portfolio: 0.0,
            market_cap: None,
            pe_ratio: None,
            dividend_yield: None,
            price_history: None,
        }
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_shares(mut self, shares_held: f64) -> Self {
        self.shares_held = shares_held;
        self
    }

    pub fn with_market_value(mut self, market_value: f64) -> Self {
        self.market_value = market_value;
        self
    }

    pub fn with_price_history(mut self, history: Vec<PricePoint>) -> Self {
        self.price_history = Some(history);
        self
    }

    /// Price points, empty when the holding carries no history.
    #[must_use]
    pub fn history(&self) -> &[PricePoint] {
        self.price_history.as_deref().unwrap_or_default()
    }

    /// Price recorded for `month`, if the history has a point for it.
    #[must_use]
    pub fn price_at(&self, month: &str) -> Option<f64> {
        self.history()
            .iter()
            .find(|p| p.month == month)
            .map(|p| p.value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(v: StringOrNumber) -> Self {
        match v {
            StringOrNumber::Text(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}

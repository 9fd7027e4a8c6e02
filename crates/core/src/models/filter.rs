use serde::{Deserialize, Serialize};

use super::aggregate::Category;
use super::holding::Holding;

/// Wire value meaning "no restriction" for a category selector.
pub const ALL: &str = "all";

/// Either "all" or an exact category value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelector {
    #[default]
    All,
    Exact(String),
}

impl CategorySelector {
    pub fn exact(value: impl Into<String>) -> Self {
        CategorySelector::Exact(value.into())
    }

    /// An absent category only passes the `All` selector.
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Exact(expected) => value == Some(expected.as_str()),
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelector::All)
    }
}

impl From<String> for CategorySelector {
    fn from(value: String) -> Self {
        if value == ALL {
            CategorySelector::All
        } else {
            CategorySelector::Exact(value)
        }
    }
}

impl From<&str> for CategorySelector {
    fn from(value: &str) -> Self {
        CategorySelector::from(value.to_string())
    }
}

impl From<CategorySelector> for String {
    fn from(value: CategorySelector) -> Self {
        match value {
            CategorySelector::All => ALL.to_string(),
            CategorySelector::Exact(v) => v,
        }
    }
}

impl std::fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategorySelector::All => write!(f, "{ALL}"),
            CategorySelector::Exact(v) => write!(f, "{v}"),
        }
    }
}

/// Sector and country selectors, applied as a conjunction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub sector: CategorySelector,
    #[serde(default)]
    pub country: CategorySelector,
}

impl Filter {
    /// The identity filter: every holding passes.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(sector: impl Into<CategorySelector>, country: impl Into<CategorySelector>) -> Self {
        Self {
            sector: sector.into(),
            country: country.into(),
        }
    }

    pub fn selector(&self, category: Category) -> &CategorySelector {
        match category {
            Category::Sector => &self.sector,
            Category::Country => &self.country,
        }
    }

    #[must_use]
    pub fn matches(&self, holding: &Holding) -> bool {
        [Category::Sector, Category::Country]
            .into_iter()
            .all(|category| self.selector(category).matches(category.value_of(holding)))
    }
}

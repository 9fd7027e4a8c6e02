use serde::{Deserialize, Serialize};

use crate::models::aggregate::Category;
use crate::models::filter::{CategorySelector, Filter};
use crate::models::settings::Settings;
use crate::models::sort::{SortKey, SortState};
use crate::models::window::Window;

/// Page currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Portfolio,
    Stock {
        id: String,
    },
    Sectors,
    Countries,
}

impl View {
    /// Breakdown category shown by this page, if it is a breakdown page.
    #[must_use]
    pub fn breakdown_category(&self) -> Option<Category> {
        match self {
            View::Sectors => Some(Category::Sector),
            View::Countries => Some(Category::Country),
            _ => None,
        }
    }
}

/// User interactions that change the application state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Navigate(View),
    SetSectorFilter(CategorySelector),
    SetCountryFilter(CategorySelector),
    ClearFilters,
    ToggleSort(SortKey),
    SetWindow(Window),
}

/// Everything the UI needs to remember between interactions.
///
/// State only moves forward through [`AppState::apply`], which consumes the
/// old value and returns the new one. Derived data (filtered holdings,
/// breakdowns, series) is never stored here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub view: View,
    pub filter: Filter,
    pub sort: SortState,
    pub window: Window,
}

impl AppState {
    /// Initial state with the window and sort taken from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            view: View::default(),
            filter: Filter::all(),
            sort: settings.default_sort,
            window: settings.default_window,
        }
    }

    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Navigate(view) => Self { view, ..self },
            Action::SetSectorFilter(sector) => Self {
                filter: Filter { sector, ..self.filter },
                ..self
            },
            Action::SetCountryFilter(country) => Self {
                filter: Filter { country, ..self.filter },
                ..self
            },
            Action::ClearFilters => Self {
                filter: Filter::all(),
                ..self
            },
            Action::ToggleSort(key) => Self {
                sort: self.sort.toggle(key),
                ..self
            },
            Action::SetWindow(window) => Self { window, ..self },
        }
    }
}

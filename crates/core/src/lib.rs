pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod state;

use log::{info, warn};
use models::{
    aggregate::Category,
    filter::Filter,
    holding::Holding,
    settings::Settings,
    snapshot::PortfolioSnapshot,
    view::{BreakdownView, DashboardView, HoldingsTable, StockDetail},
};
use providers::traits::SnapshotProvider;
use services::{
    aggregator_service::AggregatorService, snapshot_service::SnapshotService,
    view_service::ViewService,
};
use state::{Action, AppState, View};

use errors::CoreError;

/// Main entry point for the portfolio dashboard core library.
/// Holds the loaded snapshot, the UI state, and the services that derive
/// every page from them.
///
/// Accessors return `None` until a snapshot has been loaded, so "no data
/// yet" stays distinguishable from "the filter matched nothing".
#[must_use]
pub struct PortfolioDashboard {
    snapshot: Option<PortfolioSnapshot>,
    state: AppState,
    settings: Settings,
    aggregator: AggregatorService,
    snapshot_service: SnapshotService,
    view_service: ViewService,
}

impl std::fmt::Debug for PortfolioDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioDashboard")
            .field(
                "holdings",
                &self.snapshot.as_ref().map(|s| s.holdings.len()),
            )
            .field("state", &self.state)
            .field("settings", &self.settings)
            .finish()
    }
}

impl PortfolioDashboard {
    /// Create an empty dashboard with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create an empty dashboard whose initial sort and window come from `settings`.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            snapshot: None,
            state: AppState::from_settings(&settings),
            settings,
            aggregator: AggregatorService::new(),
            snapshot_service: SnapshotService::new(),
            view_service: ViewService::new(),
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Replace the snapshot with one decoded from JSON text.
    /// On error the previously loaded snapshot is kept.
    pub fn load_from_json(&mut self, json: &str) -> Result<(), CoreError> {
        let snapshot = self.snapshot_service.parse_snapshot(json)?;
        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// Load a snapshot from a JSON file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(&mut self, path: &str) -> Result<(), CoreError> {
        let json = std::fs::read_to_string(path)?;
        self.load_from_json(&json)
    }

    /// Fetch a fresh snapshot from `provider` and swap it in.
    ///
    /// The UI state (page, filter, sort, window) survives the refresh.
    /// On error the previously loaded snapshot is kept.
    pub async fn refresh(&mut self, provider: &dyn SnapshotProvider) -> Result<(), CoreError> {
        match provider.fetch_snapshot().await {
            Ok(snapshot) => {
                info!(
                    "Refreshed snapshot from {}: {} holdings",
                    provider.name(),
                    snapshot.holdings.len()
                );
                self.snapshot = Some(snapshot);
                Ok(())
            }
            Err(e) => {
                warn!("Snapshot refresh from {} failed: {e}", provider.name());
                Err(e)
            }
        }
    }

    /// Returns `true` once a snapshot has been loaded.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.snapshot.is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&PortfolioSnapshot> {
        self.snapshot.as_ref()
    }

    // ── State ───────────────────────────────────────────────────────

    /// Apply a user action to the UI state.
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.state.filter
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Views ───────────────────────────────────────────────────────

    /// Holdings passing the active filter, in snapshot order.
    #[must_use]
    pub fn filtered_holdings(&self) -> Option<Vec<&Holding>> {
        let snapshot = self.snapshot.as_ref()?;
        Some(
            self.aggregator
                .filter_holdings(&snapshot.holdings, &self.state.filter),
        )
    }

    /// Overview page, labelled with the configured display currency.
    #[must_use]
    pub fn dashboard(&self) -> Option<DashboardView> {
        let snapshot = self.snapshot.as_ref()?;
        Some(self.view_service.dashboard(
            snapshot,
            &self.state.filter,
            self.state.window,
            &self.settings.display_currency,
        ))
    }

    #[must_use]
    pub fn holdings_table(&self) -> Option<HoldingsTable> {
        let snapshot = self.snapshot.as_ref()?;
        Some(
            self.view_service
                .holdings_table(snapshot, &self.state.filter, self.state.sort),
        )
    }

    #[must_use]
    pub fn sector_breakdown(&self) -> Option<BreakdownView> {
        self.breakdown(Category::Sector)
    }

    #[must_use]
    pub fn country_breakdown(&self) -> Option<BreakdownView> {
        self.breakdown(Category::Country)
    }

    /// Breakdown shown on the current page.
    ///
    /// `None` before a snapshot is loaded or when the current view is not
    /// the sectors or countries page.
    #[must_use]
    pub fn current_breakdown(&self) -> Option<BreakdownView> {
        self.breakdown(self.state.view.breakdown_category()?)
    }

    /// Detail of the stock the current view points at.
    ///
    /// `Ok(None)` when no snapshot is loaded or the current view is not a
    /// stock page; `Err(HoldingNotFound)` when the id is unknown.
    pub fn selected_stock(&self) -> Result<Option<StockDetail>, CoreError> {
        let (Some(snapshot), View::Stock { id }) = (self.snapshot.as_ref(), &self.state.view) else {
            return Ok(None);
        };
        self.view_service
            .stock_detail(snapshot, id, &self.settings.dividend_months)
            .map(Some)
    }

    /// Sector filter choices, taken from the full snapshot.
    #[must_use]
    pub fn sector_options(&self) -> Vec<String> {
        self.options(Category::Sector)
    }

    /// Country filter choices, taken from the full snapshot.
    #[must_use]
    pub fn country_options(&self) -> Vec<String> {
        self.options(Category::Country)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn breakdown(&self, category: Category) -> Option<BreakdownView> {
        let snapshot = self.snapshot.as_ref()?;
        Some(
            self.view_service
                .breakdown(snapshot, &self.state.filter, category),
        )
    }

    fn options(&self, category: Category) -> Vec<String> {
        self.snapshot
            .as_ref()
            .map(|s| self.aggregator.category_options(&s.holdings, category))
            .unwrap_or_default()
    }
}

impl Default for PortfolioDashboard {
    fn default() -> Self {
        Self::new()
    }
}

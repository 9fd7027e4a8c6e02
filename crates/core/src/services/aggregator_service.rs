use std::collections::{HashMap, HashSet};

use log::debug;

use crate::models::aggregate::{Category, CategoryAggregate, MonthlyTotal};
use crate::models::calendar::calendar_labels;
use crate::models::filter::Filter;
use crate::models::holding::Holding;
use crate::models::sort::{SortDirection, SortKey};
use crate::models::window::Window;

/// Derives every holdings-based view: filtered subsets, category
/// breakdowns, the monthly value series and sorted tables.
///
/// All operations are pure. They borrow the holdings they are given and
/// return fresh results on every call; nothing is cached, so a call with
/// the same inputs always yields the same output. Inputs are any iterator
/// of `&Holding`, which lets a filtered `Vec<&Holding>` be fed straight
/// into the next step.
pub struct AggregatorService;

impl AggregatorService {
    pub fn new() -> Self {
        Self
    }

    /// Holdings passing both the sector and the country selector, in
    /// their original relative order. The source is never modified.
    pub fn filter_holdings<'a, I>(&self, holdings: I, filter: &Filter) -> Vec<&'a Holding>
    where
        I: IntoIterator<Item = &'a Holding>,
    {
        let mut total = 0usize;
        let filtered: Vec<&Holding> = holdings
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|h| filter.matches(h))
            .collect();
        debug!(
            "Filtered holdings (sector={}, country={}): {} of {}",
            filter.sector,
            filter.country,
            filtered.len(),
            total
        );
        filtered
    }

    /// Group holdings by the value `category_fn` extracts, summing market
    /// value and counting members.
    ///
    /// Groups come out in first-seen order. Holdings for which the
    /// accessor returns `None` are left out of every group.
    pub fn aggregate_by_category<'a, I, F>(&self, holdings: I, category_fn: F) -> Vec<CategoryAggregate>
    where
        I: IntoIterator<Item = &'a Holding>,
        F: Fn(&'a Holding) -> Option<&'a str>,
    {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut aggregates: Vec<CategoryAggregate> = Vec::new();

        for holding in holdings {
            let Some(key) = category_fn(holding) else {
                continue;
            };
            let slot = *index.entry(key).or_insert_with(|| {
                aggregates.push(CategoryAggregate::new(key));
                aggregates.len() - 1
            });
            aggregates[slot].add(holding);
        }

        aggregates
    }

    /// Sector or country breakdown.
    pub fn breakdown<'a, I>(&self, holdings: I, category: Category) -> Vec<CategoryAggregate>
    where
        I: IntoIterator<Item = &'a Holding>,
    {
        self.aggregate_by_category(holdings, |h| category.value_of(h))
    }

    /// Total value of the holdings per month over the trailing
    /// `window_months` months, oldest first.
    ///
    /// The month axis comes from the first holding's price history; with
    /// no holdings, or a first holding that has no history at all, the
    /// fixed Jan..Dec calendar is used. A first history that is present but
    /// empty yields an empty series. Each month's value is `Σ shares_held × price_at_month`,
    /// with a missing price point contributing 0. Current share counts
    /// are applied to every month, so this approximates the valuation of
    /// a portfolio whose positions never changed during the year.
    pub fn monthly_portfolio_series<'a, I>(&self, holdings: I, window_months: usize) -> Vec<MonthlyTotal>
    where
        I: IntoIterator<Item = &'a Holding>,
    {
        let holdings: Vec<&Holding> = holdings.into_iter().collect();

        let months: Vec<String> = match holdings.first().and_then(|h| h.price_history.as_ref()) {
            Some(history) => history.iter().map(|p| p.month.clone()).collect(),
            None => calendar_labels(),
        };

        let start = months.len().saturating_sub(window_months);
        months[start..]
            .iter()
            .map(|month| MonthlyTotal {
                month: month.clone(),
                value: holdings
                    .iter()
                    .map(|h| h.price_at(month).map_or(0.0, |price| price * h.shares_held))
                    .sum(),
            })
            .collect()
    }

    /// `monthly_portfolio_series` for one of the dashboard windows.
    pub fn series_for_window<'a, I>(&self, holdings: I, window: Window) -> Vec<MonthlyTotal>
    where
        I: IntoIterator<Item = &'a Holding>,
    {
        self.monthly_portfolio_series(holdings, window.months())
    }

    /// Stable sort by one column. Equal values keep their input order in
    /// both directions.
    pub fn sort_holdings<'a, I>(&self, holdings: I, key: SortKey, direction: SortDirection) -> Vec<&'a Holding>
    where
        I: IntoIterator<Item = &'a Holding>,
    {
        let mut sorted: Vec<&Holding> = holdings.into_iter().collect();
        sorted.sort_by(|a, b| {
            let ord = key.value_of(a).compare(&key.value_of(b));
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        sorted
    }

    /// Distinct values of a category in first-seen order, for filter
    /// choices. Pass the full collection, not a filtered one.
    pub fn category_options<'a, I>(&self, holdings: I, category: Category) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Holding>,
    {
        let mut seen = HashSet::new();
        holdings
            .into_iter()
            .filter_map(|h| category.value_of(h))
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect()
    }

    /// Look a holding up by id.
    pub fn find_holding<'a>(&self, holdings: &'a [Holding], id: &str) -> Option<&'a Holding> {
        holdings.iter().find(|h| h.id == id)
    }
}

impl Default for AggregatorService {
    fn default() -> Self {
        Self::new()
    }
}

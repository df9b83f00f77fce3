//! Assembles the combined dashboard read model from a movement snapshot.

use std::collections::BTreeSet;

use serde::Serialize;
use time::Date;

use crate::{
    filter::{FilterCriteria, filter_movements},
    movement::Movement,
    report::{
        CategoryBreakdown, Comparative, DistributionSlice, PeriodSummary, TOP_CATEGORY_COUNT,
        TimeSeriesPoint, category_distribution, compare_last_two_months, summarize, time_series,
        top_categories,
    },
};

/// Everything the dashboard needs to render, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    /// Totals for the filtered period.
    pub summary: PeriodSummary,

    /// Month-over-month comparatives, one for income and one for expenses.
    pub comparatives: [Comparative; 2],

    /// The highest-volume categories, ranked.
    pub top_categories: Vec<CategoryBreakdown>,

    /// Income and expenses per month, ascending.
    pub time_series: Vec<TimeSeriesPoint>,

    /// Absolute movement volume per category.
    pub distribution: Vec<DistributionSlice>,

    /// Sorted names of the categories present in the unfiltered snapshot,
    /// for populating the category filter control.
    pub category_options: Vec<String>,
}

/// Derive every dashboard read model from `movements`.
///
/// The snapshot is filtered once by `criteria`, with date cutoffs anchored
/// at the caller-supplied `today`, and each report runs independently over
/// the filtered set. The result is a fresh value owned by the caller;
/// nothing is cached or mutated in place, so re-invoking with the same
/// snapshot yields the same report.
pub fn build_dashboard_report(
    movements: &[Movement],
    criteria: &FilterCriteria,
    today: Date,
) -> DashboardReport {
    let filtered = filter_movements(movements, criteria, today);

    DashboardReport {
        summary: summarize(&filtered, criteria.range),
        comparatives: compare_last_two_months(&filtered),
        top_categories: top_categories(&filtered, TOP_CATEGORY_COUNT),
        time_series: time_series(&filtered),
        distribution: category_distribution(&filtered),
        category_options: category_options(movements),
    }
}

/// Sorted unique category names across the whole snapshot.
///
/// Uncategorised movements are not listed; the filter control reaches them
/// through its "all" option instead.
pub fn category_options(movements: &[Movement]) -> Vec<String> {
    let names: BTreeSet<&str> = movements
        .iter()
        .filter_map(|movement| movement.category.as_ref())
        .map(|category| category.description.as_str())
        .collect();

    names.into_iter().map(str::to_owned).collect()
}

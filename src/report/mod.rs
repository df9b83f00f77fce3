//! Read models derived from a movement snapshot.
//!
//! Every function in this module is pure and total: given any syntactically
//! valid movement collection it returns its documented zero-valued default
//! rather than erroring, and division by zero is short-circuited to 0
//! everywhere. Monetary outputs are rounded to 2 decimals and percentages to
//! 1 decimal, once, at each component's output boundary.

mod categories;
mod comparative;
mod series;
mod summary;

pub use categories::{CategoryBreakdown, TOP_CATEGORY_COUNT, top_categories};
pub use comparative::{Comparative, compare_last_two_months, variation_percent};
pub use series::{DistributionSlice, TimeSeriesPoint, category_distribution, time_series};
pub use summary::{MonthlyRow, PeriodSummary, monthly_report, summarize};

/// Round a monetary amount to cents.
pub(crate) fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a percentage to one decimal place.
pub(crate) fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

//! Finreports is a reporting engine for personal finance movements.
//!
//! Given an in-memory snapshot of dated, categorised income and expense
//! movements, this library derives the read models behind a finance
//! dashboard: period summaries, month-over-month comparatives, ranked
//! category breakdowns, chart-ready time series and category distributions.
//!
//! Every computation is a pure, synchronous function of its input snapshot.
//! Nothing is cached or mutated in place; re-invocation is the only update
//! mechanism. Fetching the snapshot, debouncing filter changes and caching
//! results belong to the caller.

#![warn(missing_docs)]

mod charts;
mod dashboard;
mod filter;
mod format;
mod movement;
mod period;
mod report;

pub use charts::{category_distribution_chart, monthly_series_chart, palette_color};
pub use dashboard::{DashboardReport, build_dashboard_report, category_options};
pub use filter::{DateRange, FilterCriteria, KindFilter, filter_movements};
pub use format::{format_currency, format_percent};
pub use movement::{
    Category, CategoryId, Movement, MovementId, MovementKind, UNCATEGORIZED_LABEL,
    parse_movement_date,
};
pub use period::{month_key, month_label, month_of, month_title, months_spanned};
pub use report::{
    CategoryBreakdown, Comparative, DistributionSlice, MonthlyRow, PeriodSummary,
    TOP_CATEGORY_COUNT, TimeSeriesPoint, category_distribution, compare_last_two_months,
    monthly_report, summarize, time_series, top_categories, variation_percent,
};

/// The errors that may occur when validating movement records.
///
/// Validation happens once, at the input boundary; the aggregation functions
/// themselves are total and never fail.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used for a movement or category description.
    #[error("description cannot be empty")]
    EmptyDescription,

    /// A negative amount was used to create a movement.
    ///
    /// Amounts always carry a non-negative magnitude; whether a movement
    /// adds to or subtracts from the balance is decided by its kind.
    #[error("{0} is negative, the sign of a movement is carried by its kind")]
    NegativeAmount(f64),

    /// A NaN or infinite amount was used to create a movement.
    #[error("{0} is not a finite amount")]
    NonFiniteAmount(f64),
}

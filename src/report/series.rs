//! Chart-ready series built from month buckets and category groups.
//!
//! Provides the time-indexed income/expense series and the category
//! distribution snapshot, plus the shared month-bucket fold used by the
//! other time-based reports.

use std::collections::HashMap;

use serde::Serialize;
use time::Date;

use crate::{
    movement::{Movement, MovementKind},
    period::{month_label, month_of},
    report::round_money,
};

/// Income and expense totals accumulated for one month bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(super) struct MonthTotals {
    pub income: f64,
    pub expense: f64,
}

/// Bucket dated movements by calendar month, in ascending month order.
///
/// Movements without a parseable date are skipped; they never reach any
/// month-bucketed report.
pub(super) fn monthly_buckets(movements: &[Movement]) -> Vec<(Date, MonthTotals)> {
    let mut totals: HashMap<Date, MonthTotals> = HashMap::new();

    for movement in movements {
        let Some(date) = movement.date else { continue };
        let entry = totals.entry(month_of(date)).or_default();

        match movement.kind {
            MovementKind::Income => entry.income += movement.amount,
            MovementKind::Expense => entry.expense += movement.amount,
        }
    }

    let mut buckets: Vec<(Date, MonthTotals)> = totals.into_iter().collect();
    buckets.sort_by_key(|(month, _)| *month);
    buckets
}

/// One month's point in the income/expense time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    /// Short month label, e.g. "Jan 2024".
    pub period: String,

    /// Income total for the month.
    pub income: f64,

    /// Expense total for the month.
    pub expense: f64,
}

/// One point per month bucket, ascending.
///
/// Months that saw only one kind of movement still report 0 for the other
/// kind, so both series always have a value at every point.
pub fn time_series(movements: &[Movement]) -> Vec<TimeSeriesPoint> {
    monthly_buckets(movements)
        .into_iter()
        .map(|(month, totals)| TimeSeriesPoint {
            period: month_label(month),
            income: round_money(totals.income),
            expense: round_money(totals.expense),
        })
        .collect()
}

/// One category's share of overall movement volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    /// The category display name.
    pub name: String,

    /// Unsigned money moved through the category, across both kinds.
    pub value: f64,
}

/// Absolute money moved per category, in first-seen order.
///
/// Both kinds contribute their magnitude, so the slices show proportion of
/// activity rather than signed balance. No ranking or truncation happens
/// here; display order and palette belong to the consumer.
pub fn category_distribution(movements: &[Movement]) -> Vec<DistributionSlice> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for movement in movements {
        let name = movement.category_name();
        let entry = totals.entry(name).or_insert_with(|| {
            order.push(name);
            0.0
        });
        *entry += movement.amount.abs();
    }

    order
        .into_iter()
        .map(|name| DistributionSlice {
            name: name.to_owned(),
            value: round_money(totals[name]),
        })
        .collect()
}

//! Month-over-month comparatives for income and expenses.

use serde::Serialize;

use crate::{
    movement::Movement,
    period::month_title,
    report::{
        round_money, round_percent,
        series::{MonthTotals, monthly_buckets},
    },
};

const INSUFFICIENT_HISTORY: &str = "At least two months of data are needed for a comparison.";

/// A current-versus-previous-month metric with its signed variation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparative {
    /// Heading naming the metric and, when available, the current month.
    pub title: String,

    /// The most recent month's total.
    pub current: f64,

    /// The month before that, 0 when there is no history.
    pub previous: f64,

    /// Signed percentage change from previous to current.
    pub variation_percent: f64,

    /// Sentence naming the month compared against, or explaining why no
    /// comparison was possible.
    pub description: String,
}

/// Compare the two most recent month buckets, once for income and once for
/// expenses.
///
/// With fewer than two distinct months of dated movements the pair
/// degenerates: the single available bucket's totals (or 0) become
/// `current`, `previous` and the variation are 0, and the description states
/// that more history is needed.
pub fn compare_last_two_months(movements: &[Movement]) -> [Comparative; 2] {
    let buckets = monthly_buckets(movements);

    if buckets.len() < 2 {
        let totals = buckets
            .first()
            .map_or(MonthTotals::default(), |(_, totals)| *totals);

        return [
            degenerate_comparative("Income variation", totals.income),
            degenerate_comparative("Expense variation", totals.expense),
        ];
    }

    let (current_month, current) = buckets[buckets.len() - 1];
    let (previous_month, previous) = buckets[buckets.len() - 2];

    let current_title = month_title(current_month);
    let description = format!("Compared against {}.", month_title(previous_month));

    [
        Comparative {
            title: format!("Income for {current_title}"),
            current: round_money(current.income),
            previous: round_money(previous.income),
            variation_percent: variation_percent(previous.income, current.income),
            description: description.clone(),
        },
        Comparative {
            title: format!("Expenses for {current_title}"),
            current: round_money(current.expense),
            previous: round_money(previous.expense),
            variation_percent: variation_percent(previous.expense, current.expense),
            description,
        },
    ]
}

fn degenerate_comparative(title: &str, current: f64) -> Comparative {
    Comparative {
        title: title.to_owned(),
        current: round_money(current),
        previous: 0.0,
        variation_percent: 0.0,
        description: INSUFFICIENT_HISTORY.to_owned(),
    }
}

/// Signed percentage change from `previous` to `current`, to one decimal.
///
/// A zero `previous` is short-circuited: no change stays 0, and any change
/// reports a capped full swing of 100 instead of an unbounded ratio.
pub fn variation_percent(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        if current == 0.0 { 0.0 } else { 100.0 }
    } else {
        round_percent((current - previous) / previous.abs() * 100.0)
    }
}

//! Category grouping, ranking and percentage-of-total computation.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    movement::{Movement, MovementKind},
    report::{round_money, round_percent},
};

/// How many categories the dashboard shows by default.
pub const TOP_CATEGORY_COUNT: usize = 5;

/// Aggregated totals for one category group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// The category display name, or "Uncategorized".
    pub name: String,

    /// Income total for the category.
    pub income: f64,

    /// Expense total for the category.
    pub expense: f64,

    /// `income + expense`: the money that moved through the category.
    pub total: f64,

    /// The category's share of the grand total across every group,
    /// computed before any truncation.
    pub percent_of_total: f64,
}

/// Group movements by category and rank the groups by total, descending.
///
/// Movements without a resolved category fall into an "Uncategorized" group.
/// Percentages are computed against the grand total of all groups before the
/// list is truncated to `limit` entries, so the hidden tail still weighs in.
/// A zero grand total yields 0 for every percentage. Ties keep their
/// first-seen order.
pub fn top_categories(movements: &[Movement], limit: usize) -> Vec<CategoryBreakdown> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, (f64, f64)> = HashMap::new();

    for movement in movements {
        let name = movement.category_name();
        let entry = groups.entry(name).or_insert_with(|| {
            order.push(name);
            (0.0, 0.0)
        });

        match movement.kind {
            MovementKind::Income => entry.0 += movement.amount,
            MovementKind::Expense => entry.1 += movement.amount,
        }
    }

    let grand_total: f64 = groups
        .values()
        .map(|(income, expense)| income + expense)
        .sum();

    let mut breakdowns: Vec<CategoryBreakdown> = order
        .into_iter()
        .map(|name| {
            let (income, expense) = groups[name];
            let total = income + expense;
            let percent_of_total = if grand_total == 0.0 {
                0.0
            } else {
                total / grand_total * 100.0
            };

            CategoryBreakdown {
                name: name.to_owned(),
                income: round_money(income),
                expense: round_money(expense),
                total: round_money(total),
                percent_of_total: round_percent(percent_of_total),
            }
        })
        .collect();

    // sort_by is stable, so groups with equal totals keep first-seen order.
    breakdowns.sort_by(|a, b| b.total.total_cmp(&a.total));
    breakdowns.truncate(limit);

    breakdowns
}

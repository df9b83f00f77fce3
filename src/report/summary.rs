//! Period totals and the per-month summary table.

use serde::Serialize;

use crate::{
    filter::DateRange,
    movement::{Movement, MovementKind},
    period::{month_title, months_spanned},
    report::{round_money, series::monthly_buckets},
};

/// Income, expense and balance totals for the movements in a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    /// Sum of income amounts.
    pub income: f64,

    /// Sum of expense amounts.
    pub expense: f64,

    /// `income - expense`.
    pub balance: f64,

    /// Combined movement volume divided by the months considered.
    pub monthly_average: f64,
}

impl PeriodSummary {
    const ZERO: PeriodSummary = PeriodSummary {
        income: 0.0,
        expense: 0.0,
        balance: 0.0,
        monthly_average: 0.0,
    };
}

/// Reduce `movements` into income, expense and balance totals.
///
/// The monthly average divides the combined volume by the months the range
/// selector covers (3, 6 or 12), even when the data spans fewer months.
/// [DateRange::All] divides by the inclusive month span between the earliest
/// and latest dated movement instead. Movements without a parseable date
/// still count towards the totals; they only drop out of the month span.
///
/// An empty input returns the all-zero summary, and a zero month count
/// yields an average of 0 rather than dividing by zero.
pub fn summarize(movements: &[Movement], range: DateRange) -> PeriodSummary {
    if movements.is_empty() {
        return PeriodSummary::ZERO;
    }

    let mut income = 0.0;
    let mut expense = 0.0;

    for movement in movements {
        match movement.kind {
            MovementKind::Income => income += movement.amount,
            MovementKind::Expense => expense += movement.amount,
        }
    }

    let months = match range.month_count() {
        Some(months) => months,
        None => dated_month_span(movements),
    };

    let monthly_average = if months == 0 {
        0.0
    } else {
        (income + expense) / f64::from(months)
    };

    let income = round_money(income);
    let expense = round_money(expense);

    PeriodSummary {
        income,
        expense,
        balance: round_money(income - expense),
        monthly_average: round_money(monthly_average),
    }
}

/// Inclusive month span covered by the dated movements, 0 when none carry a
/// date.
fn dated_month_span(movements: &[Movement]) -> u32 {
    let mut dates = movements.iter().filter_map(|movement| movement.date);

    let Some(first) = dates.next() else { return 0 };
    let (earliest, latest) = dates.fold((first, first), |(earliest, latest), date| {
        (earliest.min(date), latest.max(date))
    });

    months_spanned(earliest, latest)
}

/// One row of the per-month summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRow {
    /// Full month title, e.g. "January 2024".
    pub period: String,

    /// Income total for the month.
    pub income: f64,

    /// Expense total for the month.
    pub expense: f64,

    /// `income - expense` for the month.
    pub balance: f64,
}

/// Per-month income, expense and balance rows, ascending by month.
///
/// Movements without a parseable date are excluded, as with every
/// month-bucketed report.
pub fn monthly_report(movements: &[Movement]) -> Vec<MonthlyRow> {
    monthly_buckets(movements)
        .into_iter()
        .map(|(month, totals)| {
            let income = round_money(totals.income);
            let expense = round_money(totals.expense);

            MonthlyRow {
                period: month_title(month),
                income,
                expense,
                balance: round_money(income - expense),
            }
        })
        .collect()
}

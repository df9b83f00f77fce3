//! Movement filtering for the dashboard.
//!
//! A [FilterCriteria] combines three independent predicates: a date-range
//! cutoff, a movement kind, and a category name. Filtering is a pure
//! conjunction over the snapshot, recomputed per request.

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::movement::{Movement, MovementKind};

/// The date range a dashboard request covers, counted back from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    /// The last three calendar months.
    ThreeMonths,
    /// The last six calendar months.
    SixMonths,
    /// The last twelve calendar months.
    TwelveMonths,
    /// Every movement, regardless of date.
    All,
}

impl DateRange {
    /// The number of months the selector covers, `None` for [DateRange::All].
    pub fn month_count(self) -> Option<u32> {
        match self {
            DateRange::ThreeMonths => Some(3),
            DateRange::SixMonths => Some(6),
            DateRange::TwelveMonths => Some(12),
            DateRange::All => None,
        }
    }

    /// The earliest date the selector admits, `None` when unbounded.
    ///
    /// The cutoff steps back whole calendar months from `today` rather than
    /// a fixed number of days, matching the month labels used by the
    /// reports. The day of month is clamped to the target month's length.
    pub fn cutoff(self, today: Date) -> Option<Date> {
        self.month_count()
            .map(|months| subtract_months(today, months))
    }
}

/// The movement kinds a dashboard request keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    /// Keep both incomes and expenses.
    All,
    /// Keep income movements only.
    Income,
    /// Keep expense movements only.
    Expense,
}

impl KindFilter {
    fn admits(self, kind: MovementKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == MovementKind::Income,
            KindFilter::Expense => kind == MovementKind::Expense,
        }
    }
}

/// The filters applied to a movement snapshot before reporting.
///
/// A value object, rebuilt per request and never stored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// The date range to keep.
    pub range: DateRange,

    /// The movement kind to keep.
    pub kind: KindFilter,

    /// The resolved category display name to keep, `None` to keep every
    /// category. `"Uncategorized"` is a valid target and matches movements
    /// without a resolved category.
    pub category: Option<String>,
}

/// Apply `criteria` to `movements`, anchoring date cutoffs at `today`.
///
/// The three predicates are independent and combined with AND. Movements
/// without a parseable date fail the date predicate for bounded ranges and
/// pass it for [DateRange::All].
pub fn filter_movements(
    movements: &[Movement],
    criteria: &FilterCriteria,
    today: Date,
) -> Vec<Movement> {
    let cutoff = criteria.range.cutoff(today);

    movements
        .iter()
        .filter(|movement| {
            let passes_date = match cutoff {
                None => true,
                Some(cutoff) => movement.date.is_some_and(|date| date >= cutoff),
            };

            let passes_kind = criteria.kind.admits(movement.kind);

            let passes_category = criteria
                .category
                .as_deref()
                .is_none_or(|name| movement.category_name() == name);

            passes_date && passes_kind && passes_category
        })
        .cloned()
        .collect()
}

/// `date` moved back by `months` whole calendar months.
fn subtract_months(date: Date, months: u32) -> Date {
    let mut year = date.year();
    let mut month = i32::from(u8::from(date.month())) - months as i32;

    while month < 1 {
        month += 12;
        year -= 1;
    }

    let month = Month::try_from(month as u8).unwrap();
    let day = date.day().min(month.length(year));

    Date::from_calendar_date(year, month, day).unwrap()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{DateRange, FilterCriteria, KindFilter, filter_movements, subtract_months};
    use crate::movement::{Category, Movement, MovementKind, UNCATEGORIZED_LABEL};

    fn create_test_movement(
        id: i64,
        amount: f64,
        date: &str,
        kind: MovementKind,
        category: Option<&str>,
    ) -> Movement {
        let movement = Movement::new(id, "test", amount, kind)
            .unwrap()
            .with_date_str(date);

        match category {
            Some(name) => movement.with_category(
                Category::new(id, name, "#fff", "tag", kind).unwrap(),
            ),
            None => movement,
        }
    }

    #[test]
    fn subtract_months_uses_calendar_arithmetic() {
        assert_eq!(
            subtract_months(date!(2024 - 06 - 15), 3),
            date!(2024 - 03 - 15)
        );
        assert_eq!(
            subtract_months(date!(2024 - 02 - 10), 6),
            date!(2023 - 08 - 10)
        );
        assert_eq!(
            subtract_months(date!(2024 - 01 - 31), 12),
            date!(2023 - 01 - 31)
        );
    }

    #[test]
    fn subtract_months_clamps_the_day_to_the_target_month() {
        // Three months before May 31 is February, which has no day 31.
        assert_eq!(
            subtract_months(date!(2024 - 05 - 31), 3),
            date!(2024 - 02 - 29)
        );
        assert_eq!(
            subtract_months(date!(2023 - 05 - 31), 3),
            date!(2023 - 02 - 28)
        );
    }

    #[test]
    fn all_range_keeps_every_movement() {
        let movements = vec![
            create_test_movement(1, 100.0, "2015-01-01", MovementKind::Income, None),
            create_test_movement(2, 50.0, "not-a-date", MovementKind::Expense, None),
        ];
        let criteria = FilterCriteria {
            range: DateRange::All,
            kind: KindFilter::All,
            category: None,
        };

        let filtered = filter_movements(&movements, &criteria, date!(2024 - 06 - 15));

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn bounded_range_drops_old_and_undated_movements() {
        let movements = vec![
            create_test_movement(1, 100.0, "2024-06-01", MovementKind::Income, None),
            create_test_movement(2, 75.0, "2024-03-15", MovementKind::Income, None),
            create_test_movement(3, 50.0, "2024-03-14", MovementKind::Income, None),
            create_test_movement(4, 25.0, "garbage", MovementKind::Income, None),
        ];
        let criteria = FilterCriteria {
            range: DateRange::ThreeMonths,
            kind: KindFilter::All,
            category: None,
        };

        let filtered = filter_movements(&movements, &criteria, date!(2024 - 06 - 15));

        // Cutoff is 2024-03-15 inclusive.
        let ids: Vec<i64> = filtered.iter().map(|movement| movement.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn kind_and_category_filters_are_a_conjunction() {
        let movements = vec![
            create_test_movement(1, 1000.0, "2024-01-15", MovementKind::Income, Some("Salary")),
            create_test_movement(2, 300.0, "2024-01-20", MovementKind::Expense, Some("Food")),
            create_test_movement(3, 200.0, "2024-02-05", MovementKind::Expense, Some("Food")),
        ];

        // Food has no income movements, so the conjunction yields nothing.
        let criteria = FilterCriteria {
            range: DateRange::All,
            kind: KindFilter::Income,
            category: Some("Food".to_owned()),
        };
        let filtered = filter_movements(&movements, &criteria, date!(2024 - 03 - 01));
        assert!(filtered.is_empty());

        let criteria = FilterCriteria {
            range: DateRange::All,
            kind: KindFilter::Expense,
            category: Some("Food".to_owned()),
        };
        let filtered = filter_movements(&movements, &criteria, date!(2024 - 03 - 01));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn category_filter_can_target_uncategorized_movements() {
        let movements = vec![
            create_test_movement(1, 100.0, "2024-01-15", MovementKind::Expense, Some("Food")),
            create_test_movement(2, 40.0, "2024-01-16", MovementKind::Expense, None),
        ];
        let criteria = FilterCriteria {
            range: DateRange::All,
            kind: KindFilter::All,
            category: Some(UNCATEGORIZED_LABEL.to_owned()),
        };

        let filtered = filter_movements(&movements, &criteria, date!(2024 - 02 - 01));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }
}

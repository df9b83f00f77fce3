//! Calendar-month bucketing for date-based aggregation.
//!
//! Every time-based report groups movements by calendar month. A bucket is
//! identified by the first day of its month, which sorts chronologically,
//! and can be rendered as a stable `YYYY-MM` key or a human-readable label.

use time::{Date, Month};

/// The first day of the calendar month containing `date`.
///
/// This is the canonical bucket key for month-based aggregation.
pub fn month_of(date: Date) -> Date {
    date.replace_day(1).unwrap()
}

/// A stable, sortable `YYYY-MM` key for a month bucket.
///
/// Lexicographic order of keys equals chronological order of months.
pub fn month_key(month: Date) -> String {
    format!("{:04}-{:02}", month.year(), u8::from(month.month()))
}

/// A short chart label for a month bucket, e.g. "Jan 2024".
pub fn month_label(month: Date) -> String {
    format!("{} {}", short_month_name(month.month()), month.year())
}

/// A full month title for headings and table rows, e.g. "January 2024".
pub fn month_title(month: Date) -> String {
    format!("{} {}", full_month_name(month.month()), month.year())
}

/// Inclusive count of calendar months between two dates.
///
/// Dates in the same month count as 1; the day of month is ignored.
pub fn months_spanned(earliest: Date, latest: Date) -> u32 {
    let years = latest.year() - earliest.year();
    let months = i32::from(u8::from(latest.month())) - i32::from(u8::from(earliest.month()));

    (years * 12 + months + 1).max(1) as u32
}

fn short_month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

fn full_month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{month_key, month_label, month_of, month_title, months_spanned};

    #[test]
    fn month_of_pins_the_first_day() {
        assert_eq!(month_of(date!(2024 - 03 - 31)), date!(2024 - 03 - 01));
        assert_eq!(month_of(date!(2024 - 03 - 01)), date!(2024 - 03 - 01));
    }

    #[test]
    fn month_keys_sort_like_dates() {
        let months = [
            date!(2023 - 12 - 01),
            date!(2024 - 01 - 01),
            date!(2024 - 02 - 01),
            date!(2024 - 11 - 01),
        ];

        let keys: Vec<String> = months.iter().copied().map(month_key).collect();

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys[0], "2023-12");
        assert_eq!(keys[1], "2024-01");
    }

    #[test]
    fn labels_use_short_and_full_month_names() {
        assert_eq!(month_label(date!(2024 - 02 - 01)), "Feb 2024");
        assert_eq!(month_title(date!(2024 - 02 - 01)), "February 2024");
    }

    #[test]
    fn months_spanned_is_inclusive() {
        assert_eq!(months_spanned(date!(2024 - 01 - 15), date!(2024 - 01 - 20)), 1);
        assert_eq!(months_spanned(date!(2024 - 01 - 31), date!(2024 - 02 - 01)), 2);
        assert_eq!(months_spanned(date!(2023 - 11 - 05), date!(2024 - 02 - 10)), 4);
        assert_eq!(months_spanned(date!(2022 - 06 - 01), date!(2024 - 06 - 01)), 25);
    }
}

//! Plain-text formatting helpers for presenting report values.
//!
//! The engine's outputs are plain numbers; these helpers give consumers the
//! house formatting without re-deciding it per call site.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

use crate::report::round_percent;

/// Formats a monetary amount with digit grouping and no decimal places,
/// e.g. "$1,234" or "-$56".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    let number = number.round();

    if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0".to_owned()
    }
}

/// Formats a percentage to one decimal place, avoiding a "-0.0%" display.
pub fn format_percent(value: f64) -> String {
    let rounded = round_percent(value);

    if rounded == 0.0 {
        "0.0%".to_owned()
    } else {
        format!("{rounded:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_percent};

    #[test]
    fn currency_groups_digits_and_drops_decimals() {
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(999.4), "$999");
    }

    #[test]
    fn currency_prefixes_the_sign() {
        assert_eq!(format_currency(-56.0), "-$56");
    }

    #[test]
    fn currency_formats_zero() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-0.0), "$0");
        assert_eq!(format_currency(0.4), "$0");
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(format_percent(66.66666), "66.7%");
        assert_eq!(format_percent(-33.33333), "-33.3%");
        assert_eq!(format_percent(50.0), "50.0%");
    }

    #[test]
    fn percent_avoids_negative_zero() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(-0.04), "0.0%");
        assert_eq!(format_percent(0.04), "0.0%");
    }
}

//! ECharts configurations for the dashboard charts.
//!
//! Turns the chart-ready read models into charming chart definitions:
//! - **Monthly activity**: income and expense lines per month
//! - **Category distribution**: a pie of absolute volume per category
//!
//! Each chart serialises to JSON configuration for the ECharts library; the
//! consumer owns the HTML container and initialisation script.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, JsFunction, Tooltip, Trigger,
    },
    series::{Line, Pie},
};

use crate::report::{DistributionSlice, TimeSeriesPoint};

/// The cyclic palette applied to distribution slices.
const PALETTE: [&str; 7] = [
    "#53B257", "#fe6156", "#F5A623", "#7B61FF", "#44A0D6", "#BF94FF", "#FF8CC6",
];

/// The palette colour for the slice at `index`, wrapping past the end.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// A line chart of income and expenses per month.
pub fn monthly_series_chart(points: &[TimeSeriesPoint]) -> Chart {
    let labels: Vec<String> = points.iter().map(|point| point.period.clone()).collect();
    let income: Vec<f64> = points.iter().map(|point| point.income).collect();
    let expense: Vec<f64> = points.iter().map(|point| point.expense).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Monthly activity")
                .subtext("Income and expenses per month"),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Income").data(income))
        .series(Line::new().name("Expenses").data(expense))
}

/// A pie chart of absolute movement volume per category.
///
/// Slices are sorted descending by value and coloured with the cyclic
/// palette indexed by that sort position.
pub fn category_distribution_chart(slices: &[DistributionSlice]) -> Chart {
    let mut slices: Vec<&DistributionSlice> = slices.iter().collect();
    slices.sort_by(|a, b| b.value.total_cmp(&a.value));

    let colors: Vec<Color> = slices
        .iter()
        .enumerate()
        .map(|(index, _)| palette_color(index).into())
        .collect();

    let data: Vec<(f64, &str)> = slices
        .iter()
        .map(|slice| (slice.value, slice.name.as_str()))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Category distribution")
                .subtext("Absolute totals per category"),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new())
        .color(colors)
        .series(Pie::new().name("Categories").radius(vec!["40%", "70%"]).data(data))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD',
              maximumFractionDigits: 0,
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use super::{category_distribution_chart, monthly_series_chart, palette_color};
    use crate::report::{DistributionSlice, TimeSeriesPoint};

    #[test]
    fn palette_wraps_around() {
        assert_eq!(palette_color(0), palette_color(7));
        assert_eq!(palette_color(1), palette_color(8));
    }

    #[test]
    fn series_chart_includes_every_period_label() {
        let points = vec![
            TimeSeriesPoint {
                period: "Jan 2024".to_owned(),
                income: 1000.0,
                expense: 300.0,
            },
            TimeSeriesPoint {
                period: "Feb 2024".to_owned(),
                income: 0.0,
                expense: 200.0,
            },
        ];

        let options = monthly_series_chart(&points).to_string();

        assert!(options.contains("Jan 2024"));
        assert!(options.contains("Feb 2024"));
        assert!(options.contains("Income"));
        assert!(options.contains("Expenses"));
    }

    #[test]
    fn distribution_chart_colours_by_descending_value() {
        let slices = vec![
            DistributionSlice {
                name: "Food".to_owned(),
                value: 100.0,
            },
            DistributionSlice {
                name: "Salary".to_owned(),
                value: 1000.0,
            },
        ];

        let options = category_distribution_chart(&slices).to_string();

        // Salary sorts first and takes the first palette colour.
        let salary_at = options.find("Salary").unwrap();
        let food_at = options.find("Food").unwrap();
        assert!(salary_at < food_at, "expected Salary first in {options}");
        assert!(options.contains(palette_color(0)));
        assert!(options.contains(palette_color(1)));
    }
}

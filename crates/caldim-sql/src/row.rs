//! Value tuple formatting for a single calendar day.

use caldim_core::CalendarDay;

use crate::statement::StatementLayout;

/// Format one day as a parenthesized value tuple.
///
/// Field order follows [`crate::CALENDAR_COLUMNS`]; flags render as `0`/`1`.
pub fn format_row(day: &CalendarDay, layout: StatementLayout) -> String {
    format!(
        "({}, {}, {}, {}, {}, {}, {}, {})",
        date_literal(day, layout),
        day.day_of_week_index(),
        day.month_of_year_index(),
        day.year(),
        day.day_of_month_index(),
        flag(day.is_weekend()),
        flag(day.is_week_day()),
        flag(day.is_public_holiday()),
    )
}

/// Lazily format a sequence of days, preserving their order.
pub fn value_rows<I>(days: I, layout: StatementLayout) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = CalendarDay>,
{
    days.into_iter().map(move |day| format_row(&day, layout))
}

fn date_literal(day: &CalendarDay, layout: StatementLayout) -> String {
    let (year, month, dom) = (
        day.year(),
        day.month_of_year_index(),
        day.day_of_month_index(),
    );
    match layout {
        StatementLayout::Standard => format!("'{year:04}-{month:02}-{dom:02}'"),
        StatementLayout::Legacy => format!("\"{year}-{month:02}-{dom:02}\""),
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, dom: u32) -> CalendarDay {
        CalendarDay::from_ymd(year, month, dom).unwrap()
    }

    #[test]
    fn standard_row() {
        assert_eq!(
            format_row(&day(2019, 1, 1), StatementLayout::Standard),
            "('2019-01-01', 3, 1, 2019, 1, 0, 1, 1)"
        );
    }

    #[test]
    fn weekend_holiday_row() {
        // Boxing Day 2021 was a Sunday.
        assert_eq!(
            format_row(&day(2021, 12, 26), StatementLayout::Standard),
            "('2021-12-26', 1, 12, 2021, 26, 1, 0, 1)"
        );
    }

    #[test]
    fn legacy_row_uses_double_quotes() {
        assert_eq!(
            format_row(&day(2019, 4, 25), StatementLayout::Legacy),
            "(\"2019-04-25\", 5, 4, 2019, 25, 0, 1, 1)"
        );
    }

    #[test]
    fn short_years_are_padded_in_standard_layout() {
        assert!(
            format_row(&day(999, 3, 7), StatementLayout::Standard).starts_with("('0999-03-07'")
        );
        assert!(format_row(&day(999, 3, 7), StatementLayout::Legacy).starts_with("(\"999-03-07\""));
    }

    #[test]
    fn value_rows_keep_order() {
        let rows: Vec<String> = value_rows(
            [day(2020, 2, 28), day(2020, 2, 29), day(2020, 3, 1)],
            StatementLayout::Standard,
        )
        .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("('2020-02-28'"));
        assert!(rows[1].starts_with("('2020-02-29', 7, 2, 2020, 29"));
        assert!(rows[2].starts_with("('2020-03-01'"));
    }
}

//! Recurring fixed-date public holidays.
//!
//! These holidays fall on the same day and month every year, so the lookup
//! never looks at the year or the weekday. Movable holidays (Easter and
//! anything derived from it) are not covered.

use serde::Serialize;

/// A public holiday that falls on the same calendar date every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringHoliday {
    /// Display name, e.g. "Christmas Day".
    pub name: &'static str,
    /// Month of year, January = 1.
    pub month_of_year: u32,
    /// Day of month, first day = 1.
    pub day_of_month: u32,
}

impl RecurringHoliday {
    const fn new(name: &'static str, month_of_year: u32, day_of_month: u32) -> Self {
        Self {
            name,
            month_of_year,
            day_of_month,
        }
    }

    /// Returns true if this holiday falls on the given month and day.
    #[must_use]
    pub const fn falls_on(&self, month_of_year: u32, day_of_month: u32) -> bool {
        self.month_of_year == month_of_year && self.day_of_month == day_of_month
    }
}

/// Recurring public holidays, in calendar order.
pub const RECURRING_PUBLIC_HOLIDAYS: [RecurringHoliday; 4] = [
    RecurringHoliday::new("New Year's Day", 1, 1),
    RecurringHoliday::new("Anzac Day", 4, 25),
    RecurringHoliday::new("Christmas Day", 12, 25),
    RecurringHoliday::new("Boxing Day", 12, 26),
];

/// Look up the recurring holiday on a given month and day.
#[must_use]
pub fn holiday_for(month_of_year: u32, day_of_month: u32) -> Option<&'static RecurringHoliday> {
    RECURRING_PUBLIC_HOLIDAYS
        .iter()
        .find(|holiday| holiday.falls_on(month_of_year, day_of_month))
}

/// Returns true if the month and day is a recurring public holiday.
#[must_use]
pub fn is_public_holiday(month_of_year: u32, day_of_month: u32) -> bool {
    holiday_for(month_of_year, day_of_month).is_some()
}

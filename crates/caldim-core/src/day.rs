//! A single classified calendar date.

use chrono::{Datelike, NaiveDate};

use crate::holiday::{RecurringHoliday, holiday_for};

/// Weekday index of Sunday.
pub const SUNDAY_INDEX: u32 = 1;
/// Weekday index of Saturday.
pub const SATURDAY_INDEX: u32 = 7;

/// One row of the calendar dimension.
///
/// All attributes are derived from the date when the value is built.
/// Weekday indexes are fixed and locale independent: Sunday = 1 through
/// Saturday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    date: NaiveDate,
    day_of_week_index: u32,
    is_public_holiday: bool,
}

impl CalendarDay {
    /// Classify a date.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_of_week_index: date.weekday().number_from_sunday(),
            is_public_holiday: holiday_for(date.month(), date.day()).is_some(),
        }
    }

    /// Classify a date from its parts, returning `None` for dates that do not exist.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Weekday index, 1 = Sunday through 7 = Saturday.
    #[must_use]
    pub fn day_of_week_index(&self) -> u32 {
        self.day_of_week_index
    }

    /// Month index, 1 = January.
    #[must_use]
    pub fn month_of_year_index(&self) -> u32 {
        self.date.month()
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Day of month, starting at 1.
    #[must_use]
    pub fn day_of_month_index(&self) -> u32 {
        self.date.day()
    }

    /// Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.day_of_week_index, SUNDAY_INDEX | SATURDAY_INDEX)
    }

    /// Monday through Friday. Always the complement of [`Self::is_weekend`].
    #[must_use]
    pub fn is_week_day(&self) -> bool {
        !self.is_weekend()
    }

    #[must_use]
    pub fn is_public_holiday(&self) -> bool {
        self.is_public_holiday
    }

    /// The recurring holiday falling on this date, if any.
    #[must_use]
    pub fn holiday(&self) -> Option<&'static RecurringHoliday> {
        holiday_for(self.month_of_year_index(), self.day_of_month_index())
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, dom: u32) -> CalendarDay {
        CalendarDay::from_ymd(year, month, dom).expect("valid date")
    }

    #[test]
    fn new_year_2019_is_a_tuesday_holiday() {
        let d = day(2019, 1, 1);
        assert_eq!(d.day_of_week_index(), 3);
        assert_eq!(d.month_of_year_index(), 1);
        assert_eq!(d.year(), 2019);
        assert_eq!(d.day_of_month_index(), 1);
        assert!(!d.is_weekend());
        assert!(d.is_week_day());
        assert!(d.is_public_holiday());
        assert_eq!(d.holiday().map(|h| h.name), Some("New Year's Day"));
    }

    #[test]
    fn sunday_and_saturday_indexes() {
        // 2019-01-06 was a Sunday, 2019-01-05 a Saturday.
        let sunday = day(2019, 1, 6);
        let saturday = day(2019, 1, 5);
        assert_eq!(sunday.day_of_week_index(), SUNDAY_INDEX);
        assert_eq!(saturday.day_of_week_index(), SATURDAY_INDEX);
        assert!(sunday.is_weekend());
        assert!(saturday.is_weekend());
        assert!(!sunday.is_week_day());
    }

    #[test]
    fn monday_is_index_two() {
        let monday = day(2019, 1, 7);
        assert_eq!(monday.day_of_week_index(), 2);
        assert!(monday.is_week_day());
    }

    #[test]
    fn holiday_flag_ignores_weekday() {
        // Christmas 2021 fell on a Saturday.
        let christmas = day(2021, 12, 25);
        assert!(christmas.is_weekend());
        assert!(christmas.is_public_holiday());
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert!(CalendarDay::from_ymd(2021, 2, 29).is_none());
        assert!(CalendarDay::from_ymd(2020, 4, 31).is_none());
        assert!(CalendarDay::from_ymd(2020, 2, 29).is_some());
    }
}

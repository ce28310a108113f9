//! Lazy iteration over every date of a year range.

use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::day::CalendarDay;
use crate::error::{CalendarError, Result};

/// Ascending sequence of [`CalendarDay`] values covering whole years.
///
/// Produced by [`generate`]. Days are yielded year by year, month by month,
/// day by day; nothing is buffered.
#[derive(Debug, Clone)]
pub struct CalendarDays {
    year: i32,
    month: u32,
    day: u32,
    remaining: usize,
}

/// Walk every date from 1 January `from_year` through 31 December `to_year`.
///
/// An inverted range (`from_year > to_year`) is not an error and yields no
/// days.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] when either bound cannot be
/// represented as a date.
pub fn generate(from_year: i32, to_year: i32) -> Result<CalendarDays> {
    let first = first_day_of(from_year)?;
    let last = last_day_of(to_year)?;
    let remaining = if first <= last {
        (last - first).num_days() as usize + 1
    } else {
        0
    };
    Ok(CalendarDays {
        year: from_year,
        month: 1,
        day: 1,
        remaining,
    })
}

impl CalendarDays {
    fn advance(&mut self) {
        if self.day < days_in_month(self.year, self.month) {
            self.day += 1;
        } else if self.month < 12 {
            self.month += 1;
            self.day = 1;
        } else {
            self.year += 1;
            self.month = 1;
            self.day = 1;
        }
    }
}

impl Iterator for CalendarDays {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let Some(date) = NaiveDate::from_ymd_opt(self.year, self.month, self.day) else {
            self.remaining = 0;
            return None;
        };
        self.remaining -= 1;
        self.advance();
        Some(CalendarDay::new(date))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CalendarDays {}

impl FusedIterator for CalendarDays {}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of `month` (1-12) in `year`.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn first_day_of(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::YearOutOfRange { year })
}

fn last_day_of(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31).ok_or(CalendarError::YearOutOfRange { year })
}

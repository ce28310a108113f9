//! Calendar dimension building blocks.
//!
//! A [`CalendarDay`] carries every attribute of one row of a calendar
//! dimension table: weekday index (Sunday = 1), month, year, day of month,
//! weekend/weekday flags and the recurring public holiday flag.
//! [`generate`] walks a year range lazily, one day at a time, in ascending
//! order.
//!
//! ```
//! use caldim_core::generate;
//!
//! let days = generate(2020, 2020).unwrap();
//! assert_eq!(days.len(), 366);
//! ```

pub mod day;
pub mod error;
pub mod generator;
pub mod holiday;

pub use day::{CalendarDay, SATURDAY_INDEX, SUNDAY_INDEX};
pub use error::{CalendarError, Result};
pub use generator::{CalendarDays, generate};
pub use holiday::{RECURRING_PUBLIC_HOLIDAYS, RecurringHoliday, holiday_for, is_public_holiday};

//! Per-year counts collected while rows stream into the statement.

use caldim_core::CalendarDay;
use serde::Serialize;

/// Day counts for a span of dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCounts {
    pub days: usize,
    pub week_days: usize,
    pub weekend_days: usize,
    pub public_holidays: usize,
}

impl DayCounts {
    pub fn add(&mut self, day: &CalendarDay) {
        self.days += 1;
        if day.is_weekend() {
            self.weekend_days += 1;
        } else {
            self.week_days += 1;
        }
        if day.is_public_holiday() {
            self.public_holidays += 1;
        }
    }

    fn merge(&mut self, other: &DayCounts) {
        self.days += other.days;
        self.week_days += other.week_days;
        self.weekend_days += other.weekend_days;
        self.public_holidays += other.public_holidays;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearTally {
    pub year: i32,
    #[serde(flatten)]
    pub counts: DayCounts,
}

/// Running tally, one entry per year in the order first seen.
///
/// Days are expected in ascending order, which is what the generator yields.
#[derive(Debug, Clone, Default)]
pub struct CalendarTally {
    years: Vec<YearTally>,
}

impl CalendarTally {
    pub fn record(&mut self, day: &CalendarDay) {
        match self.years.last_mut() {
            Some(tally) if tally.year == day.year() => tally.counts.add(day),
            _ => {
                let mut counts = DayCounts::default();
                counts.add(day);
                self.years.push(YearTally {
                    year: day.year(),
                    counts,
                });
            }
        }
    }

    pub fn years(&self) -> &[YearTally] {
        &self.years
    }

    pub fn total(&self) -> DayCounts {
        self.years
            .iter()
            .fold(DayCounts::default(), |mut total, year| {
                total.merge(&year.counts);
                total
            })
    }
}

//! Range-wide properties of the calendar generator.

use std::collections::BTreeMap;

use caldim_core::{CalendarDay, generate};
use chrono::NaiveDate;
use proptest::prelude::*;

const HOLIDAYS: [(u32, u32); 4] = [(1, 1), (25, 4), (25, 12), (26, 12)];

fn gregorian_leap(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

fn month_length(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let next = first
        .checked_add_months(chrono::Months::new(1))
        .expect("next month");
    (next - first).num_days() as u32
}

fn days(from: i32, to: i32) -> Vec<CalendarDay> {
    generate(from, to).expect("valid range").collect()
}

#[test]
fn leap_day_2020_is_present() {
    let leap_day = days(2020, 2020)
        .into_iter()
        .find(|d| d.month_of_year_index() == 2 && d.day_of_month_index() == 29)
        .expect("2020-02-29 generated");
    assert_eq!(leap_day.year(), 2020);
    // Saturday
    assert_eq!(leap_day.day_of_week_index(), 7);
    assert!(leap_day.is_weekend());
}

#[test]
fn no_leap_day_in_2021() {
    let all = days(2021, 2021);
    assert!(
        !all.iter()
            .any(|d| d.month_of_year_index() == 2 && d.day_of_month_index() == 29)
    );
    let january = all.iter().filter(|d| d.month_of_year_index() == 1).count();
    assert_eq!(january, 31);
}

#[test]
fn first_day_of_2019() {
    let first = days(2019, 2019)[0];
    assert_eq!(first.date().to_string(), "2019-01-01");
    assert_eq!(first.day_of_week_index(), 3);
    assert!(!first.is_weekend());
    assert!(first.is_week_day());
    assert!(first.is_public_holiday());
}

#[test]
fn every_month_matches_its_length() {
    let mut per_month: BTreeMap<(i32, u32), u32> = BTreeMap::new();
    for day in days(1999, 2001) {
        *per_month
            .entry((day.year(), day.month_of_year_index()))
            .or_default() += 1;
    }
    assert_eq!(per_month.len(), 36);
    for ((year, month), count) in per_month {
        assert_eq!(count, month_length(year, month), "{year}-{month}");
    }
}

#[test]
fn days_within_a_month_have_no_gaps() {
    let all = days(2024, 2024);
    for month in 1..=12 {
        let indexes: Vec<u32> = all
            .iter()
            .filter(|d| d.month_of_year_index() == month)
            .map(CalendarDay::day_of_month_index)
            .collect();
        let expected: Vec<u32> = (1..=month_length(2024, month)).collect();
        assert_eq!(indexes, expected);
    }
}

#[test]
fn weekday_index_cycles_through_the_week() {
    let all = days(2019, 2019);
    for pair in all.windows(2) {
        let expected = pair[0].day_of_week_index() % 7 + 1;
        assert_eq!(pair[1].day_of_week_index(), expected);
    }
}

proptest! {
    #[test]
    fn row_count_matches_gregorian_year(year in 1600i32..2800) {
        let expected = if gregorian_leap(year) { 366 } else { 365 };
        prop_assert_eq!(generate(year, year).unwrap().count(), expected);
    }

    #[test]
    fn weekend_and_weekday_are_complements(year in 1900i32..2100) {
        for day in generate(year, year).unwrap() {
            prop_assert_ne!(day.is_weekend(), day.is_week_day());
            prop_assert_eq!(
                day.is_weekend(),
                day.day_of_week_index() == 1 || day.day_of_week_index() == 7
            );
        }
    }

    #[test]
    fn holiday_flag_depends_only_on_day_and_month(year in 1900i32..2100) {
        let mut holidays = 0;
        for day in generate(year, year).unwrap() {
            let key = (day.day_of_month_index(), day.month_of_year_index());
            prop_assert_eq!(day.is_public_holiday(), HOLIDAYS.contains(&key));
            if day.is_public_holiday() {
                holidays += 1;
            }
        }
        prop_assert_eq!(holidays, HOLIDAYS.len());
    }

    #[test]
    fn dates_strictly_ascend(from in 1950i32..2050, span in 0i32..3) {
        let all: Vec<_> = generate(from, from + span).unwrap().collect();
        prop_assert!(all.windows(2).all(|w| w[0].date() < w[1].date()));
        prop_assert_eq!(all.first().map(CalendarDay::year), Some(from));
        prop_assert_eq!(all.last().map(CalendarDay::year), Some(from + span));
    }

    #[test]
    fn inverted_ranges_yield_nothing(from in 1900i32..2100, back in 1i32..50) {
        prop_assert_eq!(generate(from, from - back).unwrap().count(), 0);
    }
}

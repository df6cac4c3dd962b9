//! Calendar arithmetic with year/month/day granularity
//!
//! Adding years or months keeps the day of month and clamps to the last valid
//! day (2020-02-29 + 1 year = 2021-02-28). Completed-year counts follow the same
//! clamping rule, so an anniversary landing on a clamped day counts as reached.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Add whole years to a date, clamping the day of month
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    add_months(date, years.saturating_mul(12))
}

/// Add whole months to a date, clamping the day of month
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Add calendar days
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Subtract calendar days
pub fn sub_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// True when both dates fall in the same calendar month
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Completed months from `start` to `end` (negative when `end` precedes `start`)
pub fn full_months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    if end < start {
        return -full_months_between(end, start);
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if months > 0 && add_months(start, months as u32) > end {
        months -= 1;
    }
    months
}

/// Completed years from `start` to `end` (negative when `end` precedes `start`)
pub fn full_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    full_months_between(start, end) / 12
}

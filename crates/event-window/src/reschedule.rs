//! Calendar increments used to push an event's window forward.
//!
//! Month and year steps keep the day of month and let any excess roll into
//! the following month, so Jan 31 plus one month lands on Mar 3 (or Mar 2 in
//! a leap year) and Feb 29 plus one year lands on Mar 1. Time of day is kept.
//! All arithmetic happens in UTC.

use std::fmt;

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};

/// A fixed calendar step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Increment {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Increment {
    pub const ALL: [Increment; 5] = [
        Increment::Hour,
        Increment::Day,
        Increment::Week,
        Increment::Month,
        Increment::Year,
    ];

    /// Advance `from` by one step.
    ///
    /// Returns `None` if the result falls outside the range chrono can represent.
    pub fn apply(self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Increment::Hour => from.checked_add_signed(Duration::hours(1)),
            Increment::Day => from.checked_add_days(Days::new(1)),
            Increment::Week => from.checked_add_days(Days::new(7)),
            Increment::Month => add_months_normalized(from, 1),
            Increment::Year => add_months_normalized(from, 12),
        }
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Increment::Hour => "hour",
            Increment::Day => "day",
            Increment::Week => "week",
            Increment::Month => "month",
            Increment::Year => "year",
        };
        f.write_str(name)
    }
}

/// Add whole months, rolling day-of-month overflow into the next month
/// instead of clamping to the month's last day.
fn add_months_normalized(from: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    let naive = from.naive_utc();
    let date = naive.date();

    let month_index = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(month_index.div_euclid(12)).ok()?;
    let month0 = u32::try_from(month_index.rem_euclid(12)).ok()?;

    let first_of_month = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    let target = first_of_month.checked_add_days(Days::new(u64::from(date.day0())))?;

    Some(target.and_time(naive.time()).and_utc())
}

// Date formatting and calendar helpers
use crate::error::{KitError, Result};
use crate::formatters::numbers::digits_only;
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

pub const DEFAULT_DATE_PATTERN: &str = "DD/MM/YYYY";

/// Parses a `YYYY-MM-DD` date. Parts need not be zero padded.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    let invalid = |reason: &str| KitError::InvalidDate {
        input: value.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = value.trim().split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid("expected YYYY-MM-DD"));
    };
    let year: i32 = year.parse().map_err(|_| invalid("year is not a number"))?;
    let month: u32 = month.parse().map_err(|_| invalid("month is not a number"))?;
    let day: u32 = day.parse().map_err(|_| invalid("day is not a number"))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid("no such calendar day"))
}

/// Converts `YYYY-MM-DD` to `DD/MM/YYYY`. Invalid dates give an empty string.
pub fn formatted_date(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match parse_iso_date(value) {
        Ok(date) => format_date(&date, DEFAULT_DATE_PATTERN),
        Err(err) => {
            debug!(%err, "Unparseable date, rendering empty");
            String::new()
        }
    }
}

/// Replaces the first `YYYY`, `MM` and `DD` tokens of `pattern`.
pub fn format_date<D: Datelike>(date: &D, pattern: &str) -> String {
    pattern
        .replacen("YYYY", &date.year().to_string(), 1)
        .replacen("MM", &format!("{:02}", date.month()), 1)
        .replacen("DD", &format!("{:02}", date.day()), 1)
}

/// `"2024-01-01 10:00"` → `"2024-01-01 • 10:00"`.
///
/// Anything that is not exactly a date and a time separated by one space is
/// returned unchanged.
pub fn format_date_time(value: &str) -> String {
    match value.split(' ').collect::<Vec<_>>().as_slice() {
        [date, time] => format!("{date} • {time}"),
        _ => value.to_string(),
    }
}

/// Masks a birthdate as it is typed: `"0503"` → `"05/03"`.
pub fn format_birthdate(value: &str) -> String {
    let digits = digits_only(value, 8);
    let mut formatted = String::with_capacity(10);
    for (i, ch) in digits.chars().enumerate() {
        if i == 2 || i == 4 {
            formatted.push('/');
        }
        formatted.push(ch);
    }
    formatted
}

/// Whole days between two calendar dates, ignoring any time of day.
pub fn get_days_between<A: Datelike, B: Datelike>(start: &A, end: &B) -> i64 {
    i64::from(end.num_days_from_ce() - start.num_days_from_ce()).abs()
}

/// Saturday or Sunday.
pub fn is_weekend<D: Datelike>(date: &D) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

// src/domain/business_days.rs
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Moves a date that falls on a weekend to the Monday after it.
/// Weekdays are returned unchanged.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

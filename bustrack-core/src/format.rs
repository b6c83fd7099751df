//! Display helpers shared by every page: slugs, dates, clock times, prices.

use chrono::{NaiveDate, NaiveTime};
use crate::{CoreError, CoreResult};

/// `new-york` -> `New York`.
pub fn format_location(slug: &str) -> String {
    slug.split('-')
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

/// `New York` -> `new-york`.
pub fn to_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `2025-07-15` -> `Tue, Jul 15, 2025`. Empty input stays empty; anything that
/// is not an ISO calendar date renders as `Invalid Date`.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%a, %b %-d, %Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}

pub fn parse_clock(time: &str) -> CoreResult<NaiveTime> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| CoreError::InvalidClock(time.to_string()))
}

/// `14:05` -> `2:05 PM`
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Like [`format_clock`] but from an `HH:MM` string. Unparseable input is
/// returned unchanged.
pub fn format_time(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    match parse_clock(time) {
        Ok(t) => format_clock(t),
        Err(_) => time.to_string(),
    }
}

/// Elapsed time between two clock readings, wrapping past midnight:
/// `22:30` -> `01:15` is `2h 45m`.
pub fn duration_between(start: NaiveTime, end: NaiveTime) -> String {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += 24 * 60;
    }
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn time_difference(start: &str, end: &str) -> CoreResult<String> {
    Ok(duration_between(parse_clock(start)?, parse_clock(end)?))
}

pub fn format_price(amount: u32) -> String {
    format!("${}", amount)
}

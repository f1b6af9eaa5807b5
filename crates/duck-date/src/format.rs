//! Display helpers that read an instant on the configured time zone's wall clock.
//!
//! These only format an already-computed instant; none of them do calendar
//! arithmetic.

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;

use crate::config::current_time_zone;
use crate::engine::Instant;

fn local(instant: Instant) -> DateTime<Tz> {
    instant.with_timezone(&current_time_zone())
}

/// Month number, 1-12.
pub fn month(instant: Instant) -> u32 {
    local(instant).month()
}

pub fn year(instant: Instant) -> i32 {
    local(instant).year()
}

/// Two-digit day of month, e.g. `"07"`.
pub fn day_number_string(instant: Instant) -> String {
    local(instant).format("%d").to_string()
}

/// Four-digit year, e.g. `"1992"`.
pub fn year_string(instant: Instant) -> String {
    local(instant).format("%Y").to_string()
}

/// Two-digit month, e.g. `"02"`.
pub fn month_number_string(instant: Instant) -> String {
    local(instant).format("%m").to_string()
}

/// Full English month name, e.g. `"February"`.
pub fn month_name(instant: Instant) -> String {
    local(instant).format("%B").to_string()
}

/// `yyyy-MM-dd`, e.g. `"1992-02-27"`.
pub fn short_date_string(instant: Instant) -> String {
    local(instant).format("%Y-%m-%d").to_string()
}

/// English ordinal suffix for the day of month: "st", "nd", "rd" or "th".
pub fn day_suffix(instant: Instant) -> &'static str {
    match local(instant).day() {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

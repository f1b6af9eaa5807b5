//! Adding and subtracting calendar units.
//!
//! Second, minute and hour move the instant by exact elapsed time. Day and
//! week move the local calendar date and keep the wall-clock time. Month and
//! year move calendar fields and clamp the day of month, so
//! `1992-01-31 + 1 month` is `1992-02-29`.
//!
//! The plain functions use [`configured_calendar`] and therefore the
//! process-wide first weekday and time zone at call time. The `*_with`
//! functions take an explicit [`CalendarEngine`].

use crate::engine::{CalendarEngine, Instant};
use crate::error::{fatal, DateError, Result};
use crate::gregorian::configured_calendar;
use crate::unit::CalendarUnit;

/// Move `instant` by `count` units using `engine`.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the result cannot be represented.
pub fn checked_add_with<E: CalendarEngine>(
    engine: &E,
    instant: Instant,
    unit: CalendarUnit,
    count: i64,
) -> Result<Instant> {
    engine
        .add_units(instant, unit, count)
        .ok_or_else(|| DateError::OutOfRange(format!("{instant} {count:+} {unit}(s)")))
}

/// Move `instant` by `count` units using `engine`.
///
/// # Panics
///
/// Panics if the result cannot be represented.
pub fn add_with<E: CalendarEngine>(
    engine: &E,
    instant: Instant,
    unit: CalendarUnit,
    count: i64,
) -> Instant {
    fatal(checked_add_with(engine, instant, unit, count))
}

/// Move `instant` by `count` units with the configured calendar.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the result cannot be represented.
pub fn checked_add(instant: Instant, unit: CalendarUnit, count: i64) -> Result<Instant> {
    checked_add_with(&configured_calendar(), instant, unit, count)
}

/// Move `instant` by `count` units with the configured calendar.
///
/// `count` may be negative; zero returns `instant` unchanged.
///
/// # Panics
///
/// Panics if the result cannot be represented.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use duck_date::{add, CalendarUnit};
///
/// let jan31 = Utc.with_ymd_and_hms(1992, 1, 31, 0, 0, 0).unwrap();
/// let feb = add(jan31, CalendarUnit::Month, 1);
/// assert_eq!(feb, Utc.with_ymd_and_hms(1992, 2, 29, 0, 0, 0).unwrap());
/// ```
pub fn add(instant: Instant, unit: CalendarUnit, count: i64) -> Instant {
    add_with(&configured_calendar(), instant, unit, count)
}

/// `add(instant, unit, 1)`.
pub fn plus_one(instant: Instant, unit: CalendarUnit) -> Instant {
    add(instant, unit, 1)
}

/// `add(instant, unit, -1)`.
pub fn minus_one(instant: Instant, unit: CalendarUnit) -> Instant {
    add(instant, unit, -1)
}

/// `add(instant, unit, -count)`.
///
/// # Panics
///
/// Panics if `count` is `i64::MIN` or the result cannot be represented.
pub fn minus(instant: Instant, unit: CalendarUnit, count: i64) -> Instant {
    let negated = count
        .checked_neg()
        .ok_or_else(|| DateError::OutOfRange(format!("cannot subtract {count} {unit}(s)")));
    add(instant, unit, fatal(negated))
}

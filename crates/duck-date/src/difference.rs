//! Signed whole-unit differences between instants.
//!
//! Differences are calendar-field counts, not elapsed time divided by a unit
//! length: two instants 23 hours apart that straddle a spring-forward night
//! are one calendar day apart if their wall-clock times match.
//!
//! The count is truncated toward zero: it is the largest `n` for which
//! adding `n` units to the earlier instant (with the same month-end clamping
//! as [`add`](crate::arithmetic::add)) does not pass the later one, negated
//! when the instant precedes the reference. January 31 to March 1 is
//! therefore one month, because January 31 plus one month is the last day of
//! February, and March 1 to January 31 is minus one month.

use crate::engine::{CalendarEngine, Instant};
use crate::error::{fatal, DateError, Result};
use crate::gregorian::configured_calendar;
use crate::unit::CalendarUnit;

/// Whole units from `reference` to `instant` according to `engine`.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the engine cannot step between the
/// two instants.
pub fn checked_since_with<E: CalendarEngine>(
    engine: &E,
    instant: Instant,
    reference: Instant,
    unit: CalendarUnit,
) -> Result<i64> {
    engine
        .units_between(reference, instant, unit)
        .ok_or_else(|| DateError::OutOfRange(format!("{unit}s from {reference} to {instant}")))
}

/// Whole units from `reference` to `instant`; positive when `instant` is later.
pub fn since_with<E: CalendarEngine>(
    engine: &E,
    instant: Instant,
    reference: Instant,
    unit: CalendarUnit,
) -> i64 {
    fatal(checked_since_with(engine, instant, reference, unit))
}

/// Whole units from `instant` to `other`; positive when `other` is later.
pub fn before_with<E: CalendarEngine>(
    engine: &E,
    instant: Instant,
    other: Instant,
    unit: CalendarUnit,
) -> i64 {
    since_with(engine, other, instant, unit)
}

/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the calendar cannot step between the
/// two instants.
pub fn checked_since(instant: Instant, reference: Instant, unit: CalendarUnit) -> Result<i64> {
    checked_since_with(&configured_calendar(), instant, reference, unit)
}

/// Whole units from `reference` to `instant` with the configured calendar.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use duck_date::{since, CalendarUnit};
///
/// let jan31 = Utc.with_ymd_and_hms(1992, 1, 31, 0, 0, 0).unwrap();
/// let mar1 = Utc.with_ymd_and_hms(1992, 3, 1, 0, 0, 0).unwrap();
/// assert_eq!(since(mar1, jan31, CalendarUnit::Month), 1);
/// assert_eq!(since(mar1, jan31, CalendarUnit::Day), 30);
/// ```
pub fn since(instant: Instant, reference: Instant, unit: CalendarUnit) -> i64 {
    since_with(&configured_calendar(), instant, reference, unit)
}

/// Whole units from `instant` to `other` with the configured calendar.
pub fn before(instant: Instant, other: Instant, unit: CalendarUnit) -> i64 {
    before_with(&configured_calendar(), instant, other, unit)
}

//! Start and end of the calendar unit containing an instant.
//!
//! The end is exclusive: `end_of(t, Day)` is the first instant of the next
//! day, not the last moment of the current one, so
//! `end_of(t, Day) == start_of(add(t, Day, 1), Day)`.
//!
//! Week boundaries follow the engine's first weekday; for the plain functions
//! that is [`current_first_weekday`](crate::config::current_first_weekday) at
//! call time.

use crate::engine::{CalendarEngine, Instant, UnitRange};
use crate::error::{fatal, DateError, Result};
use crate::gregorian::configured_calendar;
use crate::unit::CalendarUnit;

/// The unit instance containing `instant`, according to `engine`.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if a boundary cannot be represented.
pub fn checked_range_of_with<E: CalendarEngine>(
    engine: &E,
    instant: Instant,
    unit: CalendarUnit,
) -> Result<UnitRange> {
    engine
        .range_of(instant, unit)
        .ok_or_else(|| DateError::OutOfRange(format!("{unit} containing {instant}")))
}

/// # Panics
///
/// Panics if a boundary cannot be represented.
pub fn range_of_with<E: CalendarEngine>(
    engine: &E,
    instant: Instant,
    unit: CalendarUnit,
) -> UnitRange {
    fatal(checked_range_of_with(engine, instant, unit))
}

/// First instant of the unit containing `instant`, according to `engine`.
///
/// # Panics
///
/// Panics if the boundary cannot be represented.
pub fn start_of_with<E: CalendarEngine>(engine: &E, instant: Instant, unit: CalendarUnit) -> Instant {
    range_of_with(engine, instant, unit).start
}

/// First instant after the unit containing `instant`, according to `engine`.
///
/// # Panics
///
/// Panics if the boundary cannot be represented.
pub fn end_of_with<E: CalendarEngine>(engine: &E, instant: Instant, unit: CalendarUnit) -> Instant {
    range_of_with(engine, instant, unit).end()
}

/// The unit instance containing `instant`, with the configured calendar.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if a boundary cannot be represented.
pub fn checked_range_of(instant: Instant, unit: CalendarUnit) -> Result<UnitRange> {
    checked_range_of_with(&configured_calendar(), instant, unit)
}

/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the start cannot be represented.
pub fn checked_start_of(instant: Instant, unit: CalendarUnit) -> Result<Instant> {
    checked_range_of(instant, unit).map(|range| range.start)
}

/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the end cannot be represented.
pub fn checked_end_of(instant: Instant, unit: CalendarUnit) -> Result<Instant> {
    checked_range_of(instant, unit).map(|range| range.end())
}

/// The unit instance containing `instant`, with the configured calendar.
///
/// # Panics
///
/// Panics if a boundary cannot be represented.
pub fn range_of(instant: Instant, unit: CalendarUnit) -> UnitRange {
    range_of_with(&configured_calendar(), instant, unit)
}

/// First instant of the unit containing `instant`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use duck_date::{start_of, CalendarUnit};
///
/// // 1992-02-27 is a Thursday; weeks start on Monday by default.
/// let t = Utc.with_ymd_and_hms(1992, 2, 27, 15, 0, 0).unwrap();
/// let monday = Utc.with_ymd_and_hms(1992, 2, 24, 0, 0, 0).unwrap();
/// assert_eq!(start_of(t, CalendarUnit::Week), monday);
/// ```
pub fn start_of(instant: Instant, unit: CalendarUnit) -> Instant {
    range_of(instant, unit).start
}

/// First instant after the unit containing `instant` (exclusive end).
pub fn end_of(instant: Instant, unit: CalendarUnit) -> Instant {
    range_of(instant, unit).end()
}

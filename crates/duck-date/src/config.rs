//! Process-wide calendar configuration.
//!
//! Holds the weekday that starts a week and the time zone wall-clock
//! computations are evaluated in. Both are read at call time by
//! [`configured_calendar`](crate::gregorian::configured_calendar), so a change
//! affects every computation made afterwards, including on instants created
//! before the change.
//!
//! The first weekday lives in an atomic and the time zone behind an `RwLock`,
//! so concurrent readers and writers are well-defined. Callers that need a
//! stable configuration for a sequence of calls should build their own
//! [`GregorianCalendar`](crate::gregorian::GregorianCalendar) and use the
//! `*_with` functions instead.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::RwLock;

use chrono_tz::Tz;
use tracing::debug;

use crate::weekday::Weekday;

static FIRST_WEEKDAY: AtomicU8 = AtomicU8::new(Weekday::Monday.ordinal());

static TIME_ZONE: RwLock<Tz> = RwLock::new(Tz::UTC);

/// Set the weekday that starts a week for every subsequent computation.
pub fn set_first_weekday(weekday: Weekday) {
    let previous = FIRST_WEEKDAY.swap(weekday.ordinal(), Ordering::Relaxed);
    debug!(
        previous = previous,
        current = weekday.ordinal(),
        "first weekday changed"
    );
}

/// The weekday that currently starts a week. Monday unless changed.
pub fn current_first_weekday() -> Weekday {
    // Only `set_first_weekday` writes, and it always stores a valid ordinal.
    Weekday::from_ordinal(FIRST_WEEKDAY.load(Ordering::Relaxed)).unwrap_or_default()
}

/// Restore the default first weekday (Monday).
pub fn reset_first_weekday() {
    set_first_weekday(Weekday::default());
}

/// Set the time zone in which day, week, month and year boundaries are evaluated.
pub fn set_time_zone(tz: Tz) {
    // A poisoned lock still holds a valid `Tz`.
    let mut guard = TIME_ZONE.write().unwrap_or_else(|e| e.into_inner());
    debug!(previous = %guard.name(), current = %tz.name(), "time zone changed");
    *guard = tz;
}

/// The time zone currently used for wall-clock computations. UTC unless changed.
pub fn current_time_zone() -> Tz {
    *TIME_ZONE.read().unwrap_or_else(|e| e.into_inner())
}

/// Serializes unit tests that mutate the process-wide configuration.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

//! The calendar engine seam.
//!
//! Every operation in this crate is written against [`CalendarEngine`]. The
//! production implementation is [`GregorianCalendar`](crate::gregorian::GregorianCalendar);
//! tests also drive the operations through a deterministic fake.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Serialize, Serializer};

use crate::unit::CalendarUnit;
use crate::weekday::Weekday;

/// An absolute point in time.
pub type Instant = DateTime<Utc>;

/// The capabilities the arithmetic layer needs from a calendar.
///
/// Every method returns `None` only when the result cannot be represented
/// (the computation overflows the supported range of [`Instant`]).
pub trait CalendarEngine {
    /// The weekday this engine treats as the start of a week.
    fn first_weekday(&self) -> Weekday;

    /// Move `instant` by `count` units (negative moves backwards).
    fn add_units(&self, instant: Instant, unit: CalendarUnit, count: i64) -> Option<Instant>;

    /// The unit instance that contains `instant`.
    fn range_of(&self, instant: Instant, unit: CalendarUnit) -> Option<UnitRange>;

    /// Signed number of whole units from `from` to `to`. Swapping the
    /// operands negates the result.
    fn units_between(&self, from: Instant, to: Instant, unit: CalendarUnit) -> Option<i64>;
}

impl<E: CalendarEngine + ?Sized> CalendarEngine for &E {
    fn first_weekday(&self) -> Weekday {
        (**self).first_weekday()
    }

    fn add_units(&self, instant: Instant, unit: CalendarUnit, count: i64) -> Option<Instant> {
        (**self).add_units(instant, unit, count)
    }

    fn range_of(&self, instant: Instant, unit: CalendarUnit) -> Option<UnitRange> {
        (**self).range_of(instant, unit)
    }

    fn units_between(&self, from: Instant, to: Instant, unit: CalendarUnit) -> Option<i64> {
        (**self).units_between(from, to, unit)
    }
}

/// The half-open range `[start, start + duration)` occupied by one unit instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitRange {
    /// First instant inside the unit.
    pub start: Instant,
    /// Calendar-true length of the unit (always positive).
    pub duration: TimeDelta,
}

impl UnitRange {
    /// The first instant after the unit (exclusive end).
    pub fn end(&self) -> Instant {
        self.start + self.duration
    }

    /// Whether `instant` falls inside `[start, end)`.
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end()
    }
}

impl Serialize for UnitRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr {
            start: String,
            end: String,
            duration_seconds: i64,
        }

        Repr {
            start: self.start.to_rfc3339(),
            end: self.end().to_rfc3339(),
            duration_seconds: self.duration.num_seconds(),
        }
        .serialize(serializer)
    }
}

//! # duck-date
//!
//! Calendar-unit arithmetic on absolute instants.
//!
//! Given an instant, duck-date computes the start and end of the day, week,
//! month or year containing it, moves it by whole calendar units, compares it
//! with other instants, and counts the whole calendar units between two
//! instants. All week-based computations honor a configurable first weekday
//! (Monday by default).
//!
//! The calendar itself (leap years, month lengths, time zones and DST) is
//! delegated to `chrono` and `chrono-tz` through the [`CalendarEngine`] trait.
//!
//! ## Modules
//!
//! - [`config`]: Process-wide first weekday and time zone
//! - [`engine`]: The [`CalendarEngine`] seam and [`UnitRange`]
//! - [`gregorian`]: chrono-backed [`GregorianCalendar`] and [`configured_calendar`]
//! - [`arithmetic`]: Add or subtract a signed count of a unit
//! - [`boundary`]: Start/end (exclusive) of the unit containing an instant
//! - [`comparison`]: Ordering predicates
//! - [`difference`]: Signed whole-unit differences
//! - [`ext`]: The same operations as methods on [`Instant`]
//! - [`format`]: Display helpers with fixed patterns
//! - [`unit`]: [`CalendarUnit`] and its parsing
//! - [`weekday`]: [`Weekday`] with Sunday-based ordinals
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use duck_date::DateExt;
//!
//! let thursday = Utc.with_ymd_and_hms(1992, 2, 27, 12, 0, 0).unwrap();
//! let start = thursday.start_of_week();
//! assert_eq!(start, Utc.with_ymd_and_hms(1992, 2, 24, 0, 0, 0).unwrap());
//! assert_eq!(start.plus_one_day().plus_days(6), thursday.end_of_week());
//! ```

pub mod arithmetic;
pub mod boundary;
pub mod comparison;
pub mod config;
pub mod difference;
pub mod engine;
pub mod error;
pub mod ext;
pub mod format;
pub mod gregorian;
pub mod unit;
pub mod weekday;

pub use arithmetic::{add, add_with, checked_add, checked_add_with, minus, minus_one, plus_one};
pub use boundary::{
    checked_end_of, checked_range_of, checked_range_of_with, checked_start_of, end_of,
    end_of_with, range_of, range_of_with, start_of, start_of_with,
};
pub use comparison::{
    compare, is_after, is_before, is_equal, is_greater_or_equal_to, is_greater_than,
    is_less_or_equal_to, is_less_than, is_on_or_after, is_on_or_before,
};
pub use config::{
    current_first_weekday, current_time_zone, reset_first_weekday, set_first_weekday,
    set_time_zone,
};
pub use difference::{before, before_with, checked_since, checked_since_with, since, since_with};
pub use engine::{CalendarEngine, Instant, UnitRange};
pub use error::{DateError, Result};
pub use ext::DateExt;
pub use gregorian::{configured_calendar, GregorianCalendar};
pub use unit::CalendarUnit;
pub use weekday::Weekday;

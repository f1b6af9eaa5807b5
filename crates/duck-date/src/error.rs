//! Error types for duck-date operations.
//!
//! The calendar arithmetic itself is total over representable instants; these
//! errors cover parsing user input and the `checked_*` surfaces that report
//! range overflow instead of panicking.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid calendar unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, DateError>;

/// Unwrap a checked computation in the infallible API.
///
/// An `Err` here means the result falls outside the range the calendar can
/// represent, a precondition the caller is responsible for.
#[track_caller]
pub(crate) fn fatal<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("calendar precondition violated: {e}"),
    }
}

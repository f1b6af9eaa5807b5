//! Calendar granularities used to select an arithmetic or range path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// A calendar unit.
///
/// Second, minute and hour are fixed-duration units. Day, week, month and
/// year are calendar-field units whose length depends on where they fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl CalendarUnit {
    /// All units, from finest to coarsest.
    pub const ALL: [CalendarUnit; 7] = [
        CalendarUnit::Second,
        CalendarUnit::Minute,
        CalendarUnit::Hour,
        CalendarUnit::Day,
        CalendarUnit::Week,
        CalendarUnit::Month,
        CalendarUnit::Year,
    ];

    /// Whether the unit always spans the same number of seconds.
    pub const fn is_fixed_duration(self) -> bool {
        matches!(
            self,
            CalendarUnit::Second | CalendarUnit::Minute | CalendarUnit::Hour
        )
    }

    /// Length in seconds for fixed-duration units, `None` for calendar units.
    pub const fn fixed_seconds(self) -> Option<i64> {
        match self {
            CalendarUnit::Second => Some(1),
            CalendarUnit::Minute => Some(60),
            CalendarUnit::Hour => Some(3600),
            _ => None,
        }
    }

    /// Lowercase singular name, e.g. `"week"`.
    pub const fn name(self) -> &'static str {
        match self {
            CalendarUnit::Second => "second",
            CalendarUnit::Minute => "minute",
            CalendarUnit::Hour => "hour",
            CalendarUnit::Day => "day",
            CalendarUnit::Week => "week",
            CalendarUnit::Month => "month",
            CalendarUnit::Year => "year",
        }
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarUnit {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "second" | "seconds" | "sec" | "secs" | "s" => Ok(CalendarUnit::Second),
            "minute" | "minutes" | "min" | "mins" => Ok(CalendarUnit::Minute),
            "hour" | "hours" | "hr" | "hrs" | "h" => Ok(CalendarUnit::Hour),
            "day" | "days" | "d" => Ok(CalendarUnit::Day),
            "week" | "weeks" | "wk" | "wks" | "w" => Ok(CalendarUnit::Week),
            "month" | "months" | "mo" => Ok(CalendarUnit::Month),
            "year" | "years" | "yr" | "yrs" | "y" => Ok(CalendarUnit::Year),
            _ => Err(DateError::InvalidUnit(format!("'{s}'"))),
        }
    }
}

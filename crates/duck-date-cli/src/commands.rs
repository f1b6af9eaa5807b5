use std::cmp::Ordering;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use duck_date::{
    checked_add, checked_range_of, checked_since, compare, configured_calendar, format,
    CalendarEngine, CalendarUnit, DateError, Instant, Weekday,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::cli::Command;

/// Result of one subcommand: a plain-text line and its JSON form.
pub struct Report {
    pub text: String,
    pub json: serde_json::Value,
}

impl Report {
    fn instant(key: &str, instant: Instant) -> Self {
        Self {
            text: instant.to_rfc3339(),
            json: json!({ key: instant.to_rfc3339() }),
        }
    }
}

#[derive(Serialize)]
struct Description {
    datetime: String,
    short_date: String,
    day: u32,
    weekday: Weekday,
    day_suffix: &'static str,
    month_name: String,
    first_weekday: Weekday,
    start_of_week: String,
    end_of_week: String,
    days_into_week: i64,
    days_in_month: i64,
}

pub fn run(command: &Command) -> Result<Report> {
    match command {
        Command::Add {
            datetime,
            count,
            unit,
        } => {
            let instant = parse_instant(datetime)?;
            let result = checked_add(instant, *unit, *count)
                .with_context(|| format!("cannot add {count} {unit}(s) to {datetime}"))?;
            info!(%instant, count, %unit, %result, "add");
            Ok(Report::instant("result", result))
        }
        Command::Start { datetime, unit } => {
            let range = checked_range_of(parse_instant(datetime)?, *unit)?;
            Ok(Report::instant("start", range.start))
        }
        Command::End { datetime, unit } => {
            let range = checked_range_of(parse_instant(datetime)?, *unit)?;
            Ok(Report::instant("end", range.end()))
        }
        Command::Range { datetime, unit } => {
            let range = checked_range_of(parse_instant(datetime)?, *unit)?;
            Ok(Report {
                text: format!("{} {}", range.start.to_rfc3339(), range.end().to_rfc3339()),
                json: serde_json::to_value(range)?,
            })
        }
        Command::Diff { from, to, unit } => {
            let from = parse_instant(from)?;
            let to = parse_instant(to)?;
            let count = checked_since(to, from, *unit)?;
            Ok(Report {
                text: count.to_string(),
                json: json!({ "unit": unit, "count": count }),
            })
        }
        Command::Compare { a, b } => {
            let relation = match compare(parse_instant(a)?, parse_instant(b)?) {
                Ordering::Less => "before",
                Ordering::Equal => "equal",
                Ordering::Greater => "after",
            };
            Ok(Report {
                text: relation.to_string(),
                json: json!({ "relation": relation }),
            })
        }
        Command::Describe { datetime } => {
            let instant = parse_instant(datetime)?;
            let description = describe(instant)?;
            Ok(Report {
                text: format!(
                    "{} {} ({}{} of {}); week {} .. {}",
                    description.weekday,
                    description.short_date,
                    description.day,
                    description.day_suffix,
                    description.month_name,
                    description.start_of_week,
                    description.end_of_week,
                ),
                json: serde_json::to_value(&description)?,
            })
        }
    }
}

fn describe(instant: Instant) -> Result<Description> {
    let calendar = configured_calendar();
    let week = checked_range_of(instant, CalendarUnit::Week)?;
    let month = checked_range_of(instant, CalendarUnit::Month)?;
    let local = calendar
        .local(instant)
        .ok_or_else(|| DateError::OutOfRange(format!("wall clock of {instant}")))?;
    Ok(Description {
        datetime: instant.to_rfc3339(),
        short_date: format::short_date_string(instant),
        day: local.day(),
        weekday: local.weekday().into(),
        day_suffix: format::day_suffix(instant),
        month_name: format::month_name(instant),
        first_weekday: calendar.first_weekday(),
        start_of_week: week.start.to_rfc3339(),
        end_of_week: week.end().to_rfc3339(),
        days_into_week: checked_since(instant, week.start, CalendarUnit::Day)?,
        days_in_month: month.duration.num_days(),
    })
}

/// Parse RFC 3339, or a plain `YYYY-MM-DD` date at midnight in the configured zone.
pub fn parse_instant(input: &str) -> Result<Instant, DateError> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| DateError::InvalidDatetime(format!("'{input}': {e}")))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| DateError::InvalidDatetime(format!("'{input}'")))?;
    let instant = configured_calendar()
        .resolve(midnight)
        .ok_or_else(|| DateError::OutOfRange(format!("'{input}'")))?;
    debug!(input, %instant, "parsed plain date");
    Ok(instant)
}

use clap::{Parser, Subcommand};
use duck_date::{CalendarUnit, Weekday};

/// Calendar-unit arithmetic on the command line.
#[derive(Parser)]
#[command(
    name = "duckdate",
    version,
    about = "Start/end of day, week, month and year; unit offsets; date differences"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Weekday that starts a week (e.g. "monday", "sun").
    #[arg(long, global = true, default_value = "monday")]
    pub first_weekday: Weekday,

    /// IANA time zone whose wall clock defines day boundaries.
    #[arg(long, global = true, default_value = "UTC")]
    pub tz: String,

    /// Print a JSON object instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
///
/// Datetimes are RFC 3339 (`2026-03-16T09:00:00Z`) or plain dates
/// (`2026-03-16`, midnight in `--tz`).
#[derive(Subcommand)]
pub enum Command {
    /// Add a signed number of units to a datetime.
    Add {
        datetime: String,
        #[arg(allow_negative_numbers = true)]
        count: i64,
        unit: CalendarUnit,
    },
    /// Start of the unit containing a datetime.
    Start { datetime: String, unit: CalendarUnit },
    /// End (exclusive) of the unit containing a datetime.
    End { datetime: String, unit: CalendarUnit },
    /// Start, end and length of the unit containing a datetime.
    Range { datetime: String, unit: CalendarUnit },
    /// Whole units from FROM to TO (negative when TO is earlier).
    Diff {
        from: String,
        to: String,
        unit: CalendarUnit,
    },
    /// Whether A is before, equal to, or after B.
    Compare { a: String, b: String },
    /// Calendar facts about a datetime.
    Describe { datetime: String },
}

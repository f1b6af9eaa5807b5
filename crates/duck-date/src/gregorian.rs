//! Proleptic Gregorian calendar engine backed by `chrono` and `chrono-tz`.
//!
//! Day, week, month and year computations happen on the local wall clock of
//! the engine's time zone, then resolve back to an absolute instant. Second,
//! minute and hour computations happen on the absolute timeline, so DST
//! transitions shift the wall clock rather than the elapsed time.
//!
//! # Local time resolution
//!
//! A wall-clock time can be ambiguous (repeated by a backward DST transition)
//! or nonexistent (skipped by a forward transition). Ambiguous times resolve
//! to the earlier instant. Nonexistent times are interpreted with the offset
//! in force before the transition, which moves them forward by the length of
//! the gap (02:30 on a spring-forward night in New York becomes 03:30 EDT).

use chrono::{
    DateTime, Datelike, Days, LocalResult, Months, NaiveDate, NaiveDateTime, Offset, TimeDelta,
    TimeZone, Utc,
};
use chrono_tz::Tz;
use tracing::trace;

use crate::config;
use crate::engine::{CalendarEngine, Instant, UnitRange};
use crate::unit::CalendarUnit;
use crate::weekday::Weekday;

/// A Gregorian calendar evaluated in one time zone with one first weekday.
///
/// Cheap to copy. Build one with [`configured_calendar`] to follow the
/// process-wide configuration, or with [`GregorianCalendar::new`] to pin both
/// settings for a sequence of calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GregorianCalendar {
    time_zone: Tz,
    first_weekday: Weekday,
}

impl Default for GregorianCalendar {
    fn default() -> Self {
        Self::new(Tz::UTC, Weekday::default())
    }
}

impl GregorianCalendar {
    pub fn new(time_zone: Tz, first_weekday: Weekday) -> Self {
        Self {
            time_zone,
            first_weekday,
        }
    }

    pub fn with_first_weekday(self, first_weekday: Weekday) -> Self {
        Self {
            first_weekday,
            ..self
        }
    }

    pub fn with_time_zone(self, time_zone: Tz) -> Self {
        Self { time_zone, ..self }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The wall-clock reading of `instant` in this calendar's time zone, or
    /// `None` when the offset pushes it outside chrono's range.
    pub fn local(&self, instant: Instant) -> Option<NaiveDateTime> {
        let offset = self.time_zone.offset_from_utc_datetime(&instant.naive_utc()).fix();
        instant.naive_utc().checked_add_offset(offset)
    }

    /// Map a wall-clock reading back to an instant (see the module docs for
    /// ambiguous and nonexistent times).
    pub fn resolve(&self, local: NaiveDateTime) -> Option<Instant> {
        match self.time_zone.from_local_datetime(&local) {
            LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
            LocalResult::None => {
                // Transitions are never less than a day apart, so the offset a
                // day earlier is the one in force before the gap.
                let before = local.checked_sub_signed(TimeDelta::days(1))?;
                let offset = self.time_zone.offset_from_utc_datetime(&before).fix();
                let utc = local
                    .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
                Some(Utc.from_utc_datetime(&utc))
            }
        }
    }

    fn offset_seconds(&self, instant: Instant) -> i64 {
        let offset = self.time_zone.offset_from_utc_datetime(&instant.naive_utc());
        i64::from(offset.fix().local_minus_utc())
    }

    fn shift_days(&self, instant: Instant, days: i64) -> Option<Instant> {
        let local = self.local(instant)?;
        let shifted = if days >= 0 {
            local.checked_add_days(Days::new(days.unsigned_abs()))?
        } else {
            local.checked_sub_days(Days::new(days.unsigned_abs()))?
        };
        self.resolve(shifted)
    }

    /// Month arithmetic clamps the day of month to the target month's length.
    fn shift_months(&self, instant: Instant, months: i64) -> Option<Instant> {
        let local = self.local(instant)?;
        let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
        let shifted = if months >= 0 {
            local.checked_add_months(magnitude)?
        } else {
            local.checked_sub_months(magnitude)?
        };
        self.resolve(shifted)
    }

    /// Fixed-length units are aligned on the local clock using the offset in
    /// force at `instant`, so hour ranges in half-hour zones start at :00 local.
    fn fixed_range(&self, instant: Instant, unit_seconds: i64) -> Option<UnitRange> {
        let offset = self.offset_seconds(instant);
        let local_seconds = instant.timestamp().checked_add(offset)?;
        let start_seconds = local_seconds - local_seconds.rem_euclid(unit_seconds) - offset;
        let start = DateTime::from_timestamp(start_seconds, 0)?;
        Some(UnitRange {
            start,
            duration: TimeDelta::try_seconds(unit_seconds)?,
        })
    }

    /// First local date of the unit containing `date` and first date of the next one.
    fn calendar_bounds(&self, date: NaiveDate, unit: CalendarUnit) -> Option<(NaiveDate, NaiveDate)> {
        match unit {
            CalendarUnit::Day => Some((date, date.succ_opt()?)),
            CalendarUnit::Week => {
                let back = Weekday::from(date.weekday()).days_since(self.first_weekday);
                let first = date.checked_sub_days(Days::new(u64::from(back)))?;
                Some((first, first.checked_add_days(Days::new(7))?))
            }
            CalendarUnit::Month => {
                let first = date.with_day(1)?;
                Some((first, first.checked_add_months(Months::new(1))?))
            }
            CalendarUnit::Year => {
                let first = NaiveDate::from_ymd_opt(date.year(), 1, 1)?;
                let next = NaiveDate::from_ymd_opt(date.year().checked_add(1)?, 1, 1)?;
                Some((first, next))
            }
            CalendarUnit::Second | CalendarUnit::Minute | CalendarUnit::Hour => None,
        }
    }

    /// Field-level guess at the difference, never more than one unit off.
    fn estimate_units(&self, from: Instant, to: Instant, unit: CalendarUnit) -> Option<i64> {
        let a = self.local(from)?.date();
        let b = self.local(to)?.date();
        match unit {
            CalendarUnit::Day => Some(b.signed_duration_since(a).num_days()),
            CalendarUnit::Week => Some(b.signed_duration_since(a).num_days() / 7),
            CalendarUnit::Month => Some(
                i64::from(b.year() - a.year()) * 12 + i64::from(b.month()) - i64::from(a.month()),
            ),
            CalendarUnit::Year => Some(i64::from(b.year() - a.year())),
            CalendarUnit::Second | CalendarUnit::Minute | CalendarUnit::Hour => None,
        }
    }

    /// Walk the estimate to the largest count for which `earlier + n units`
    /// does not pass `later`. Requires `earlier <= later`.
    fn settle_units(
        &self,
        earlier: Instant,
        later: Instant,
        unit: CalendarUnit,
        estimate: i64,
    ) -> i64 {
        let reaches = |n: i64| matches!(self.add_units(earlier, unit, n), Some(t) if t <= later);

        let mut n = estimate.max(0);
        while n > 0 && !reaches(n) {
            n -= 1;
        }
        while reaches(n + 1) {
            n += 1;
        }
        n
    }
}

impl CalendarEngine for GregorianCalendar {
    fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    fn add_units(&self, instant: Instant, unit: CalendarUnit, count: i64) -> Option<Instant> {
        if count == 0 {
            return Some(instant);
        }

        let result = match unit {
            CalendarUnit::Second | CalendarUnit::Minute | CalendarUnit::Hour => {
                let seconds = count.checked_mul(unit.fixed_seconds()?)?;
                instant.checked_add_signed(TimeDelta::try_seconds(seconds)?)
            }
            CalendarUnit::Day => self.shift_days(instant, count),
            CalendarUnit::Week => self.shift_days(instant, count.checked_mul(7)?),
            CalendarUnit::Month => self.shift_months(instant, count),
            CalendarUnit::Year => self.shift_months(instant, count.checked_mul(12)?),
        };
        trace!(%instant, %unit, count, result = ?result, "add_units");
        result
    }

    fn range_of(&self, instant: Instant, unit: CalendarUnit) -> Option<UnitRange> {
        if let Some(unit_seconds) = unit.fixed_seconds() {
            return self.fixed_range(instant, unit_seconds);
        }

        let (first, next) = self.calendar_bounds(self.local(instant)?.date(), unit)?;
        let start = self.resolve(first.and_hms_opt(0, 0, 0)?)?;
        let end = self.resolve(next.and_hms_opt(0, 0, 0)?)?;
        trace!(%instant, %unit, %start, %end, "range_of");
        Some(UnitRange {
            start,
            duration: end - start,
        })
    }

    fn units_between(&self, from: Instant, to: Instant, unit: CalendarUnit) -> Option<i64> {
        if let Some(unit_seconds) = unit.fixed_seconds() {
            // Sub-second remainders and the division both truncate toward zero.
            return Some(to.signed_duration_since(from).num_seconds() / unit_seconds);
        }

        // Count forward from the earlier instant; swapping operands only flips the sign.
        let (earlier, later) = if from <= to { (from, to) } else { (to, from) };
        let estimate = self.estimate_units(earlier, later, unit)?;
        let count = self.settle_units(earlier, later, unit, estimate);
        Some(if to < from { -count } else { count })
    }
}

/// A fresh engine reflecting the current process-wide configuration.
///
/// Never cache the result across calls that should observe
/// [`set_first_weekday`](crate::config::set_first_weekday) or
/// [`set_time_zone`](crate::config::set_time_zone).
pub fn configured_calendar() -> GregorianCalendar {
    GregorianCalendar::new(config::current_time_zone(), config::current_first_weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;
    use chrono_tz::Asia::Kolkata;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Instant {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn new_york() -> GregorianCalendar {
        GregorianCalendar::new(New_York, Weekday::Monday)
    }

    // ── add_units ───────────────────────────────────────────────────────

    #[test]
    fn test_add_zero_is_identity() {
        let cal = GregorianCalendar::default();
        let t = utc(2026, 3, 16, 9, 30, 15);
        for unit in CalendarUnit::ALL {
            assert_eq!(cal.add_units(t, unit, 0), Some(t));
        }
    }

    #[test]
    fn test_add_fixed_units() {
        let cal = GregorianCalendar::default();
        let t = utc(2026, 3, 16, 9, 0, 0);
        assert_eq!(cal.add_units(t, CalendarUnit::Second, 90), Some(utc(2026, 3, 16, 9, 1, 30)));
        assert_eq!(cal.add_units(t, CalendarUnit::Minute, -30), Some(utc(2026, 3, 16, 8, 30, 0)));
        assert_eq!(cal.add_units(t, CalendarUnit::Hour, 15), Some(utc(2026, 3, 17, 0, 0, 0)));
    }

    #[test]
    fn test_add_month_clamps_to_leap_february() {
        let cal = GregorianCalendar::default();
        let jan31 = utc(1992, 1, 31, 0, 0, 0);
        assert_eq!(cal.add_units(jan31, CalendarUnit::Month, 1), Some(utc(1992, 2, 29, 0, 0, 0)));
    }

    #[test]
    fn test_add_month_clamps_to_common_february() {
        let cal = GregorianCalendar::default();
        let jan31 = utc(2026, 1, 31, 12, 0, 0);
        assert_eq!(cal.add_units(jan31, CalendarUnit::Month, 1), Some(utc(2026, 2, 28, 12, 0, 0)));
    }

    #[test]
    fn test_subtract_month_clamps() {
        let cal = GregorianCalendar::default();
        let mar31 = utc(1992, 3, 31, 0, 0, 0);
        assert_eq!(cal.add_units(mar31, CalendarUnit::Month, -1), Some(utc(1992, 2, 29, 0, 0, 0)));
    }

    #[test]
    fn test_add_year_from_leap_day() {
        let cal = GregorianCalendar::default();
        let leap = utc(1992, 2, 29, 0, 0, 0);
        assert_eq!(cal.add_units(leap, CalendarUnit::Year, 1), Some(utc(1993, 2, 28, 0, 0, 0)));
        assert_eq!(cal.add_units(leap, CalendarUnit::Year, 4), Some(utc(1996, 2, 29, 0, 0, 0)));
    }

    #[test]
    fn test_add_weeks_moves_seven_days_each() {
        let cal = GregorianCalendar::default();
        let t = utc(1992, 2, 27, 10, 0, 0);
        assert_eq!(cal.add_units(t, CalendarUnit::Week, 2), Some(utc(1992, 3, 12, 10, 0, 0)));
        assert_eq!(cal.add_units(t, CalendarUnit::Week, -1), Some(utc(1992, 2, 20, 10, 0, 0)));
    }

    #[test]
    fn test_add_day_across_spring_forward_keeps_wall_clock() {
        // March 8, 2026: US spring forward (2:00 AM → 3:00 AM)
        // Sat Mar 7 12:00 EST = 17:00 UTC; Sun Mar 8 12:00 EDT = 16:00 UTC
        let cal = new_york();
        let saturday_noon = utc(2026, 3, 7, 17, 0, 0);
        assert_eq!(
            cal.add_units(saturday_noon, CalendarUnit::Day, 1),
            Some(utc(2026, 3, 8, 16, 0, 0))
        );
    }

    #[test]
    fn test_add_hours_across_spring_forward_is_elapsed_time() {
        let cal = new_york();
        let saturday_noon = utc(2026, 3, 7, 17, 0, 0);
        let plus_24h = cal.add_units(saturday_noon, CalendarUnit::Hour, 24).unwrap();
        assert_eq!(plus_24h, utc(2026, 3, 8, 17, 0, 0));
        // 13:00 EDT on the wall clock
        assert_eq!(
            cal.local(plus_24h).unwrap().time(),
            chrono::NaiveTime::from_hms_opt(13, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_add_day_into_gap_moves_forward() {
        // Sat Mar 7 02:30 EST + 1 day = Sun Mar 8 02:30, which does not exist → 03:30 EDT
        let cal = new_york();
        let t = utc(2026, 3, 7, 7, 30, 0);
        assert_eq!(cal.add_units(t, CalendarUnit::Day, 1), Some(utc(2026, 3, 8, 7, 30, 0)));
    }

    #[test]
    fn test_add_day_into_repeated_hour_takes_earlier() {
        // Nov 1, 2026: US fall back (2:00 AM → 1:00 AM). 01:30 occurs twice.
        let cal = new_york();
        let t = utc(2026, 10, 31, 5, 30, 0); // Sat Oct 31 01:30 EDT
        assert_eq!(cal.add_units(t, CalendarUnit::Day, 1), Some(utc(2026, 11, 1, 5, 30, 0)));
    }

    #[test]
    fn test_add_overflow_returns_none() {
        let cal = GregorianCalendar::default();
        let t = utc(2026, 1, 1, 0, 0, 0);
        assert_eq!(cal.add_units(t, CalendarUnit::Year, 1_000_000), None);
        assert_eq!(cal.add_units(t, CalendarUnit::Second, i64::MAX), None);
        assert_eq!(cal.add_units(t, CalendarUnit::Week, i64::MIN), None);
    }

    #[test]
    fn test_wall_clock_outside_chrono_range_is_none() {
        // New York is behind UTC, so the earliest instant has no local reading.
        let cal = new_york();
        let first = DateTime::<Utc>::MIN_UTC;
        assert_eq!(cal.local(first), None);
        assert_eq!(cal.add_units(first, CalendarUnit::Day, 1), None);
        assert_eq!(cal.add_units(first, CalendarUnit::Month, 1), None);
        assert_eq!(cal.range_of(first, CalendarUnit::Day), None);
        assert_eq!(cal.range_of(first, CalendarUnit::Hour), None);
        assert_eq!(cal.units_between(first, utc(2026, 1, 1, 0, 0, 0), CalendarUnit::Day), None);
    }

    // ── range_of ────────────────────────────────────────────────────────

    #[test]
    fn test_day_range_utc() {
        let cal = GregorianCalendar::default();
        let range = cal.range_of(utc(2026, 3, 16, 14, 5, 0), CalendarUnit::Day).unwrap();
        assert_eq!(range.start, utc(2026, 3, 16, 0, 0, 0));
        assert_eq!(range.end(), utc(2026, 3, 17, 0, 0, 0));
    }

    #[test]
    fn test_day_range_spring_forward_is_23_hours() {
        let cal = new_york();
        let range = cal.range_of(utc(2026, 3, 8, 15, 0, 0), CalendarUnit::Day).unwrap();
        assert_eq!(range.start, utc(2026, 3, 8, 5, 0, 0));
        assert_eq!(range.end(), utc(2026, 3, 9, 4, 0, 0));
        assert_eq!(range.duration, TimeDelta::hours(23));
    }

    #[test]
    fn test_day_range_fall_back_is_25_hours() {
        let cal = new_york();
        let range = cal.range_of(utc(2026, 11, 1, 15, 0, 0), CalendarUnit::Day).unwrap();
        assert_eq!(range.start, utc(2026, 11, 1, 4, 0, 0));
        assert_eq!(range.duration, TimeDelta::hours(25));
    }

    #[test]
    fn test_week_range_depends_on_first_weekday() {
        // 1992-02-27 is a Thursday
        let t = utc(1992, 2, 27, 8, 0, 0);
        let monday = GregorianCalendar::default();
        let sunday = monday.with_first_weekday(Weekday::Sunday);

        let range = monday.range_of(t, CalendarUnit::Week).unwrap();
        assert_eq!(range.start, utc(1992, 2, 24, 0, 0, 0));
        assert_eq!(range.end(), utc(1992, 3, 2, 0, 0, 0));

        let range = sunday.range_of(t, CalendarUnit::Week).unwrap();
        assert_eq!(range.start, utc(1992, 2, 23, 0, 0, 0));
        assert_eq!(range.end(), utc(1992, 3, 1, 0, 0, 0));
    }

    #[test]
    fn test_week_range_on_first_weekday_starts_same_day() {
        let cal = GregorianCalendar::default().with_first_weekday(Weekday::Thursday);
        let range = cal.range_of(utc(1992, 2, 27, 23, 59, 59), CalendarUnit::Week).unwrap();
        assert_eq!(range.start, utc(1992, 2, 27, 0, 0, 0));
    }

    #[test]
    fn test_month_and_year_ranges_have_calendar_lengths() {
        let cal = GregorianCalendar::default();
        let feb = cal.range_of(utc(1992, 2, 10, 0, 0, 0), CalendarUnit::Month).unwrap();
        assert_eq!(feb.start, utc(1992, 2, 1, 0, 0, 0));
        assert_eq!(feb.duration, TimeDelta::days(29));

        let dec = cal.range_of(utc(2026, 12, 31, 23, 0, 0), CalendarUnit::Month).unwrap();
        assert_eq!(dec.end(), utc(2027, 1, 1, 0, 0, 0));

        let leap_year = cal.range_of(utc(1992, 7, 1, 0, 0, 0), CalendarUnit::Year).unwrap();
        assert_eq!(leap_year.start, utc(1992, 1, 1, 0, 0, 0));
        assert_eq!(leap_year.duration, TimeDelta::days(366));

        let common_year = cal.range_of(utc(2026, 7, 1, 0, 0, 0), CalendarUnit::Year).unwrap();
        assert_eq!(common_year.duration, TimeDelta::days(365));
    }

    #[test]
    fn test_fixed_ranges() {
        let cal = GregorianCalendar::default();
        let t = utc(2026, 3, 16, 14, 5, 42) + TimeDelta::milliseconds(250);
        let second = cal.range_of(t, CalendarUnit::Second).unwrap();
        assert_eq!(second.start, utc(2026, 3, 16, 14, 5, 42));
        assert_eq!(second.duration, TimeDelta::seconds(1));

        let minute = cal.range_of(t, CalendarUnit::Minute).unwrap();
        assert_eq!(minute.start, utc(2026, 3, 16, 14, 5, 0));

        let hour = cal.range_of(t, CalendarUnit::Hour).unwrap();
        assert_eq!(hour.start, utc(2026, 3, 16, 14, 0, 0));
        assert_eq!(hour.end(), utc(2026, 3, 16, 15, 0, 0));
    }

    #[test]
    fn test_hour_range_in_half_hour_zone() {
        // 10:15 UTC = 15:45 IST; the hour starts at 15:00 IST = 09:30 UTC
        let cal = GregorianCalendar::new(Kolkata, Weekday::Monday);
        let hour = cal.range_of(utc(2026, 3, 16, 10, 15, 0), CalendarUnit::Hour).unwrap();
        assert_eq!(hour.start, utc(2026, 3, 16, 9, 30, 0));
    }

    #[test]
    fn test_hour_range_in_repeated_hour() {
        // 06:30 UTC on Nov 1 2026 is the second 01:30 (EST)
        let cal = new_york();
        let t = utc(2026, 11, 1, 6, 30, 0);
        let hour = cal.range_of(t, CalendarUnit::Hour).unwrap();
        assert_eq!(hour.start, utc(2026, 11, 1, 6, 0, 0));
        assert!(hour.contains(t));
    }

    // ── units_between ───────────────────────────────────────────────────

    #[test]
    fn test_days_between_is_calendar_days_not_elapsed() {
        // Sat Mar 7 23:00 EST → Sun Mar 8 23:00 EDT: 23 hours elapsed, one calendar day
        let cal = new_york();
        let from = utc(2026, 3, 8, 4, 0, 0);
        let to = utc(2026, 3, 9, 3, 0, 0);
        assert_eq!(to - from, TimeDelta::hours(23));
        assert_eq!(cal.units_between(from, to, CalendarUnit::Day), Some(1));
        assert_eq!(cal.units_between(to, from, CalendarUnit::Day), Some(-1));
    }

    #[test]
    fn test_days_between_truncates_partial_days() {
        let cal = GregorianCalendar::default();
        let from = utc(2026, 3, 16, 10, 0, 0);
        assert_eq!(cal.units_between(from, utc(2026, 3, 17, 9, 59, 59), CalendarUnit::Day), Some(0));
        assert_eq!(cal.units_between(from, utc(2026, 3, 17, 10, 0, 0), CalendarUnit::Day), Some(1));
        assert_eq!(cal.units_between(from, utc(2026, 3, 14, 11, 0, 0), CalendarUnit::Day), Some(-1));
    }

    #[test]
    fn test_weeks_between() {
        let cal = GregorianCalendar::default();
        let from = utc(1992, 2, 24, 0, 0, 0);
        assert_eq!(cal.units_between(from, utc(1992, 3, 15, 0, 0, 0), CalendarUnit::Week), Some(2));
        assert_eq!(cal.units_between(from, utc(1992, 3, 16, 0, 0, 0), CalendarUnit::Week), Some(3));
        assert_eq!(cal.units_between(from, utc(1992, 2, 10, 0, 0, 1), CalendarUnit::Week), Some(-1));
    }

    #[test]
    fn test_months_between_with_clamping() {
        let cal = GregorianCalendar::default();
        let jan31 = utc(1992, 1, 31, 0, 0, 0);
        // Jan 31 + 1 month clamps to Feb 29, which does not pass Mar 1
        assert_eq!(cal.units_between(jan31, utc(1992, 3, 1, 0, 0, 0), CalendarUnit::Month), Some(1));
        assert_eq!(cal.units_between(jan31, utc(1992, 2, 29, 0, 0, 0), CalendarUnit::Month), Some(1));
        assert_eq!(cal.units_between(jan31, utc(1992, 2, 28, 0, 0, 0), CalendarUnit::Month), Some(0));
    }

    #[test]
    fn test_months_between_negative() {
        let cal = GregorianCalendar::default();
        let from = utc(2026, 5, 15, 12, 0, 0);
        assert_eq!(cal.units_between(from, utc(2026, 2, 15, 12, 0, 0), CalendarUnit::Month), Some(-3));
        assert_eq!(cal.units_between(from, utc(2026, 2, 15, 13, 0, 0), CalendarUnit::Month), Some(-2));
    }

    #[test]
    fn test_years_between() {
        let cal = GregorianCalendar::default();
        let leap = utc(1992, 2, 29, 0, 0, 0);
        assert_eq!(cal.units_between(leap, utc(1993, 2, 28, 0, 0, 0), CalendarUnit::Year), Some(1));
        assert_eq!(cal.units_between(leap, utc(2026, 2, 27, 0, 0, 0), CalendarUnit::Year), Some(33));
        assert_eq!(cal.units_between(utc(2026, 2, 27, 0, 0, 0), leap, CalendarUnit::Year), Some(-33));
    }

    #[test]
    fn test_fixed_units_between_truncate_toward_zero() {
        let cal = GregorianCalendar::default();
        let from = utc(2026, 3, 16, 10, 0, 0);
        let to = utc(2026, 3, 16, 11, 30, 0);
        assert_eq!(cal.units_between(from, to, CalendarUnit::Hour), Some(1));
        assert_eq!(cal.units_between(to, from, CalendarUnit::Hour), Some(-1));
        assert_eq!(cal.units_between(from, to, CalendarUnit::Minute), Some(90));
        assert_eq!(cal.units_between(from, to, CalendarUnit::Second), Some(5400));
    }

    #[test]
    fn test_days_between_is_antisymmetric_across_gap() {
        // Sat Mar 7 02:30 EST and Sun Mar 8 03:15 EDT: one day after the first
        // is the nonexistent 02:30, pushed to 03:30 EDT, which passes the second.
        let cal = new_york();
        let a = utc(2026, 3, 7, 7, 30, 0);
        let b = utc(2026, 3, 8, 7, 15, 0);
        assert_eq!(cal.units_between(a, b, CalendarUnit::Day), Some(0));
        assert_eq!(cal.units_between(b, a, CalendarUnit::Day), Some(0));
    }

    #[test]
    fn test_months_between_is_antisymmetric_with_clamping() {
        let cal = GregorianCalendar::default();
        let jan31 = utc(1992, 1, 31, 0, 0, 0);
        let feb29 = utc(1992, 2, 29, 0, 0, 0);
        assert_eq!(cal.units_between(jan31, feb29, CalendarUnit::Month), Some(1));
        assert_eq!(cal.units_between(feb29, jan31, CalendarUnit::Month), Some(-1));
    }

    #[test]
    fn test_units_between_same_instant_is_zero() {
        let cal = new_york();
        let t = utc(2026, 3, 8, 7, 0, 0);
        for unit in CalendarUnit::ALL {
            assert_eq!(cal.units_between(t, t, unit), Some(0));
        }
    }

    // ── configured_calendar ─────────────────────────────────────────────

    #[test]
    fn test_configured_calendar_reads_current_settings() {
        let _guard = config::test_guard();
        config::set_first_weekday(Weekday::Sunday);
        config::set_time_zone(New_York);
        let cal = configured_calendar();
        assert_eq!(cal.first_weekday(), Weekday::Sunday);
        assert_eq!(cal.time_zone(), New_York);

        config::reset_first_weekday();
        config::set_time_zone(Tz::UTC);
        assert_eq!(configured_calendar(), GregorianCalendar::default());
    }
}

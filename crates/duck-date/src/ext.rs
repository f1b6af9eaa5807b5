//! Method-style access to the calendar operations.
//!
//! [`DateExt`] puts the whole named API on [`Instant`] so call sites read
//! left to right: `t.start_of_week().plus_one_day().plus_days(6)`. Every
//! method goes through the configured calendar, so week-based methods follow
//! [`set_first_weekday`](crate::config::set_first_weekday) at call time.
//!
//! # Panics
//!
//! Arithmetic and boundary methods panic when the result falls outside the
//! representable range, exactly like the free functions they delegate to.

use crate::engine::Instant;
use crate::unit::CalendarUnit;
use crate::{arithmetic, boundary, comparison, difference};

/// Calendar operations as methods.
pub trait DateExt: Sized {
    // ── Unit arithmetic ─────────────────────────────────────────────────

    // Fixed units (second, minute, hour) move by elapsed time; calendar units
    // keep the wall-clock time and clamp the day of month.
    fn plus_one_second(self) -> Self;
    fn plus_seconds(self, count: i64) -> Self;
    fn minus_one_second(self) -> Self;
    fn minus_seconds(self, count: i64) -> Self;
    fn plus_one_minute(self) -> Self;
    fn plus_minutes(self, count: i64) -> Self;
    fn minus_one_minute(self) -> Self;
    fn minus_minutes(self, count: i64) -> Self;
    fn plus_one_hour(self) -> Self;
    fn plus_hours(self, count: i64) -> Self;
    fn minus_one_hour(self) -> Self;
    fn minus_hours(self, count: i64) -> Self;
    fn plus_one_day(self) -> Self;
    fn plus_days(self, count: i64) -> Self;
    fn minus_one_day(self) -> Self;
    fn minus_days(self, count: i64) -> Self;
    fn plus_one_week(self) -> Self;
    fn plus_weeks(self, count: i64) -> Self;
    fn minus_one_week(self) -> Self;
    fn minus_weeks(self, count: i64) -> Self;
    fn plus_one_month(self) -> Self;
    fn plus_months(self, count: i64) -> Self;
    fn minus_one_month(self) -> Self;
    fn minus_months(self, count: i64) -> Self;
    fn plus_one_year(self) -> Self;
    fn plus_years(self, count: i64) -> Self;
    fn minus_one_year(self) -> Self;
    fn minus_years(self, count: i64) -> Self;

    // ── Unit boundaries ─────────────────────────────────────────────────

    fn start_of_day(self) -> Self;
    /// Exclusive: the first instant of the following day.
    fn end_of_day(self) -> Self;
    fn start_of_week(self) -> Self;
    /// Exclusive: the first instant of the following week.
    fn end_of_week(self) -> Self;
    fn start_of_month(self) -> Self;
    /// Exclusive: the first instant of the following month.
    fn end_of_month(self) -> Self;
    fn start_of_year(self) -> Self;
    /// Exclusive: the first instant of the following year.
    fn end_of_year(self) -> Self;

    // ── Comparison ──────────────────────────────────────────────────────

    fn is_after_date(self, date: Self) -> bool;
    fn is_greater_than_date(self, date: Self) -> bool;
    fn is_on_or_after_date(self, date: Self) -> bool;
    fn is_greater_or_equal_to_date(self, date: Self) -> bool;
    fn is_before_date(self, date: Self) -> bool;
    fn is_less_than_date(self, date: Self) -> bool;
    fn is_on_or_before_date(self, date: Self) -> bool;
    fn is_less_or_equal_to_date(self, date: Self) -> bool;
    fn is_equal_to_date(self, date: Self) -> bool;

    // ── Differences ─────────────────────────────────────────────────────

    /// Whole days from `date` to `self`; negative when `date` is later.
    fn days_since_date(self, date: Self) -> i64;
    /// Whole days from `self` to `date`.
    fn days_before_date(self, date: Self) -> i64;
    fn weeks_since_date(self, date: Self) -> i64;
    fn weeks_before_date(self, date: Self) -> i64;
    fn months_since_date(self, date: Self) -> i64;
    fn months_before_date(self, date: Self) -> i64;
    fn years_since_date(self, date: Self) -> i64;
    fn years_before_date(self, date: Self) -> i64;
}

impl DateExt for Instant {
    fn plus_one_second(self) -> Self {
        arithmetic::plus_one(self, CalendarUnit::Second)
    }

    fn plus_seconds(self, count: i64) -> Self {
        arithmetic::add(self, CalendarUnit::Second, count)
    }

    fn minus_one_second(self) -> Self {
        arithmetic::minus_one(self, CalendarUnit::Second)
    }

    fn minus_seconds(self, count: i64) -> Self {
        arithmetic::minus(self, CalendarUnit::Second, count)
    }

    fn plus_one_minute(self) -> Self {
        arithmetic::plus_one(self, CalendarUnit::Minute)
    }

    fn plus_minutes(self, count: i64) -> Self {
        arithmetic::add(self, CalendarUnit::Minute, count)
    }

    fn minus_one_minute(self) -> Self {
        arithmetic::minus_one(self, CalendarUnit::Minute)
    }

    fn minus_minutes(self, count: i64) -> Self {
        arithmetic::minus(self, CalendarUnit::Minute, count)
    }

    fn plus_one_hour(self) -> Self {
        arithmetic::plus_one(self, CalendarUnit::Hour)
    }

    fn plus_hours(self, count: i64) -> Self {
        arithmetic::add(self, CalendarUnit::Hour, count)
    }

    fn minus_one_hour(self) -> Self {
        arithmetic::minus_one(self, CalendarUnit::Hour)
    }

    fn minus_hours(self, count: i64) -> Self {
        arithmetic::minus(self, CalendarUnit::Hour, count)
    }

    fn plus_one_day(self) -> Self {
        arithmetic::plus_one(self, CalendarUnit::Day)
    }

    fn plus_days(self, count: i64) -> Self {
        arithmetic::add(self, CalendarUnit::Day, count)
    }

    fn minus_one_day(self) -> Self {
        arithmetic::minus_one(self, CalendarUnit::Day)
    }

    fn minus_days(self, count: i64) -> Self {
        arithmetic::minus(self, CalendarUnit::Day, count)
    }

    fn plus_one_week(self) -> Self {
        arithmetic::plus_one(self, CalendarUnit::Week)
    }

    fn plus_weeks(self, count: i64) -> Self {
        arithmetic::add(self, CalendarUnit::Week, count)
    }

    fn minus_one_week(self) -> Self {
        arithmetic::minus_one(self, CalendarUnit::Week)
    }

    fn minus_weeks(self, count: i64) -> Self {
        arithmetic::minus(self, CalendarUnit::Week, count)
    }

    fn plus_one_month(self) -> Self {
        arithmetic::plus_one(self, CalendarUnit::Month)
    }

    fn plus_months(self, count: i64) -> Self {
        arithmetic::add(self, CalendarUnit::Month, count)
    }

    fn minus_one_month(self) -> Self {
        arithmetic::minus_one(self, CalendarUnit::Month)
    }

    fn minus_months(self, count: i64) -> Self {
        arithmetic::minus(self, CalendarUnit::Month, count)
    }

    fn plus_one_year(self) -> Self {
        arithmetic::plus_one(self, CalendarUnit::Year)
    }

    fn plus_years(self, count: i64) -> Self {
        arithmetic::add(self, CalendarUnit::Year, count)
    }

    fn minus_one_year(self) -> Self {
        arithmetic::minus_one(self, CalendarUnit::Year)
    }

    fn minus_years(self, count: i64) -> Self {
        arithmetic::minus(self, CalendarUnit::Year, count)
    }

    fn start_of_day(self) -> Self {
        boundary::start_of(self, CalendarUnit::Day)
    }

    fn end_of_day(self) -> Self {
        boundary::end_of(self, CalendarUnit::Day)
    }

    fn start_of_week(self) -> Self {
        boundary::start_of(self, CalendarUnit::Week)
    }

    fn end_of_week(self) -> Self {
        boundary::end_of(self, CalendarUnit::Week)
    }

    fn start_of_month(self) -> Self {
        boundary::start_of(self, CalendarUnit::Month)
    }

    fn end_of_month(self) -> Self {
        boundary::end_of(self, CalendarUnit::Month)
    }

    fn start_of_year(self) -> Self {
        boundary::start_of(self, CalendarUnit::Year)
    }

    fn end_of_year(self) -> Self {
        boundary::end_of(self, CalendarUnit::Year)
    }

    fn is_after_date(self, date: Self) -> bool {
        comparison::is_after(self, date)
    }

    fn is_greater_than_date(self, date: Self) -> bool {
        comparison::is_greater_than(self, date)
    }

    fn is_on_or_after_date(self, date: Self) -> bool {
        comparison::is_on_or_after(self, date)
    }

    fn is_greater_or_equal_to_date(self, date: Self) -> bool {
        comparison::is_greater_or_equal_to(self, date)
    }

    fn is_before_date(self, date: Self) -> bool {
        comparison::is_before(self, date)
    }

    fn is_less_than_date(self, date: Self) -> bool {
        comparison::is_less_than(self, date)
    }

    fn is_on_or_before_date(self, date: Self) -> bool {
        comparison::is_on_or_before(self, date)
    }

    fn is_less_or_equal_to_date(self, date: Self) -> bool {
        comparison::is_less_or_equal_to(self, date)
    }

    fn is_equal_to_date(self, date: Self) -> bool {
        comparison::is_equal(self, date)
    }

    fn days_since_date(self, date: Self) -> i64 {
        difference::since(self, date, CalendarUnit::Day)
    }

    fn days_before_date(self, date: Self) -> i64 {
        difference::before(self, date, CalendarUnit::Day)
    }

    fn weeks_since_date(self, date: Self) -> i64 {
        difference::since(self, date, CalendarUnit::Week)
    }

    fn weeks_before_date(self, date: Self) -> i64 {
        difference::before(self, date, CalendarUnit::Week)
    }

    fn months_since_date(self, date: Self) -> i64 {
        difference::since(self, date, CalendarUnit::Month)
    }

    fn months_before_date(self, date: Self) -> i64 {
        difference::before(self, date, CalendarUnit::Month)
    }

    fn years_since_date(self, date: Self) -> i64 {
        difference::since(self, date, CalendarUnit::Year)
    }

    fn years_before_date(self, date: Self) -> i64 {
        difference::before(self, date, CalendarUnit::Year)
    }
}

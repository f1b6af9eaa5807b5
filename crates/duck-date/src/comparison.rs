//! Ordering predicates between instants.
//!
//! Every predicate is defined through [`compare`], so no two of them can
//! disagree about the order of a pair.

use std::cmp::Ordering;

use crate::engine::Instant;

/// Three-way comparison of `a` against `b`.
pub fn compare(a: Instant, b: Instant) -> Ordering {
    a.cmp(&b)
}

/// `a` comes strictly after `b`.
pub fn is_after(a: Instant, b: Instant) -> bool {
    compare(a, b) == Ordering::Greater
}

/// `a` comes after `b` or is the same instant.
pub fn is_on_or_after(a: Instant, b: Instant) -> bool {
    is_after(a, b) || is_equal(a, b)
}

/// `a` comes strictly before `b`.
pub fn is_before(a: Instant, b: Instant) -> bool {
    compare(a, b) == Ordering::Less
}

/// `a` comes before `b` or is the same instant.
pub fn is_on_or_before(a: Instant, b: Instant) -> bool {
    is_before(a, b) || is_equal(a, b)
}

/// `a` and `b` are the same instant.
pub fn is_equal(a: Instant, b: Instant) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Alias of [`is_after`].
pub fn is_greater_than(a: Instant, b: Instant) -> bool {
    is_after(a, b)
}

/// Alias of [`is_on_or_after`].
pub fn is_greater_or_equal_to(a: Instant, b: Instant) -> bool {
    is_on_or_after(a, b)
}

/// Alias of [`is_before`].
pub fn is_less_than(a: Instant, b: Instant) -> bool {
    is_before(a, b)
}

/// Alias of [`is_on_or_before`].
pub fn is_less_or_equal_to(a: Instant, b: Instant) -> bool {
    is_on_or_before(a, b)
}

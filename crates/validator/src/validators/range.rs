//! `min:` and `max:` evaluators
//!
//! Integers are compared by value. Text is compared by its *length*, not
//! lexicographically and not by parsing it as a number: `min:3` on a text
//! field means "at least three characters".

use std::cmp::Ordering;

use super::length::LengthMode;
use crate::foundation::{Atom, FieldValue};

/// The quantity a bound is compared against, or `None` for skipped atoms.
#[inline]
fn magnitude(atom: &Atom<'_>, mode: LengthMode) -> Option<i64> {
    match atom {
        Atom::Int(n) => Some(*n),
        Atom::Text(text) => Some(mode.measure(text)),
        Atom::Unsupported => None,
    }
}

fn all_within(value: &FieldValue<'_>, bound: i64, mode: LengthMode, rejected: Ordering) -> bool {
    value
        .atoms()
        .iter()
        .filter_map(|atom| magnitude(atom, mode))
        .all(|m| m.cmp(&bound) != rejected)
}

/// `min:N` holds when every element is at least `min`.
pub fn check_minimum(value: &FieldValue<'_>, min: i64, mode: LengthMode) -> bool {
    all_within(value, min, mode, Ordering::Less)
}

/// `max:N` holds when every element is at most `max`.
pub fn check_maximum(value: &FieldValue<'_>, max: i64, mode: LengthMode) -> bool {
    all_within(value, max, mode, Ordering::Greater)
}

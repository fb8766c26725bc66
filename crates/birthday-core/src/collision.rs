//! Shared-birthday detection.
//!
//! Two-phase check: a linear distinct-count test handles the common
//! collision-free case, and only when a duplicate is known to exist does the
//! quadratic pairwise scan run to pick the witness.

use std::collections::HashSet;

use crate::day::DayOfYear;

/// Return a birthday that occurs at least twice in `birthdays`, or `None`
/// if all entries are distinct.
///
/// When several values collide, the witness is deterministic: the value
/// whose first occurrence has the smallest index among all colliding values.
/// Empty and single-element inputs always yield `None`.
pub fn find_shared_birthday(birthdays: &[DayOfYear]) -> Option<DayOfYear> {
    // Fast path: if the distinct count matches the length, no duplicate.
    let distinct: HashSet<DayOfYear> = birthdays.iter().copied().collect();
    if distinct.len() == birthdays.len() {
        return None;
    }

    // Slow path: a duplicate is guaranteed. Scan pairs in index order and
    // return the earliest entry that has any later equal partner.
    for (i, &a) in birthdays.iter().enumerate() {
        for &b in &birthdays[i + 1..] {
            if a == b {
                return Some(a);
            }
        }
    }

    // Unreachable: the distinct-count check above guarantees a match.
    None
}

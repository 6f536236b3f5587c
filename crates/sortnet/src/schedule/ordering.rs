//! Display ordering inside one depth level.

use std::cmp::Reverse;

use crate::comparator::Comparator;

use super::types::Level;

/// Order a level's comparators for compact drawing.
///
/// Each comparator's overlap count is the number of other comparators in the
/// level whose ranges interleave with it. Comparators are taken by fewest
/// overlaps, then widest span, then lowest `lo`. Counts are computed once for
/// the whole level and are not refreshed as comparators are taken.
pub(super) fn order_level(level: &mut Level) {
    let comparators = &level.comparators;
    let overlaps: Vec<usize> = comparators
        .iter()
        .map(|c| comparators.iter().filter(|other| c.interleaves(other)).count())
        .collect();

    let mut keyed: Vec<(usize, Comparator)> = overlaps
        .into_iter()
        .zip(comparators.iter().copied())
        .collect();
    keyed.sort_by_key(|(overlap, c)| (*overlap, Reverse(c.span()), c.lo()));

    level.comparators = keyed.into_iter().map(|(_, c)| c).collect();
}

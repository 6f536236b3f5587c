//! Schedule correctness checks.

use indexmap::IndexMap;
use thiserror::Error;

use crate::comparator::Comparator;
use crate::network::ComparisonNetwork;

use super::types::Schedule;

/// Ways a schedule can fail to describe its network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderViolation {
    /// The schedule holds a comparator a different number of times than the network.
    #[error("comparator {comparator} appears {scheduled} times in the schedule but {expected} times in the network")]
    CountMismatch {
        comparator: Comparator,
        expected: usize,
        scheduled: usize,
    },
    /// Two comparators in one level touch a common wire.
    #[error("level {level} holds {first} and {second}, which share a wire")]
    SharedWireInLevel {
        level: usize,
        first: Comparator,
        second: Comparator,
    },
    /// Two conflicting comparators were swapped relative to execution order.
    #[error("{later} is scheduled before {earlier} although both use wire {wire}")]
    ConflictReordered {
        earlier: Comparator,
        later: Comparator,
        wire: usize,
    },
}

/// Check that `schedule` is a valid re-linearization of `network`.
///
/// This checks that:
/// 1. Both hold the same comparators with the same multiplicities
/// 2. No level holds two comparators on a common wire
/// 3. Comparators sharing a wire keep their execution order
pub fn verify_schedule(network: &ComparisonNetwork, schedule: &Schedule) -> Result<(), OrderViolation> {
    // Network positions of each distinct comparator, in execution order
    let mut positions: IndexMap<Comparator, Vec<usize>> = IndexMap::new();
    for (idx, c) in network.iter().enumerate() {
        positions.entry(*c).or_default().push(idx);
    }

    let mut scheduled_counts: IndexMap<Comparator, usize> = IndexMap::new();
    for c in schedule.comparators() {
        *scheduled_counts.entry(*c).or_default() += 1;
    }

    for (c, idxs) in &positions {
        let scheduled = scheduled_counts.get(c).copied().unwrap_or(0);
        if scheduled != idxs.len() {
            return Err(OrderViolation::CountMismatch {
                comparator: *c,
                expected: idxs.len(),
                scheduled,
            });
        }
    }
    if let Some((c, &scheduled)) = scheduled_counts.iter().find(|(c, _)| !positions.contains_key(*c)) {
        return Err(OrderViolation::CountMismatch {
            comparator: *c,
            expected: 0,
            scheduled,
        });
    }

    for (level_idx, level) in schedule.levels.iter().enumerate() {
        for (i, first) in level.comparators.iter().enumerate() {
            if let Some(second) = level.comparators[i + 1..].iter().find(|c| first.shares_wire(c)) {
                return Err(OrderViolation::SharedWireInLevel {
                    level: level_idx,
                    first: *first,
                    second: *second,
                });
            }
        }
    }

    // The k-th scheduled copy of a comparator stands for its k-th network copy.
    // Along each wire, network positions must then appear in increasing order.
    let width = network.wire_count().unwrap_or(0);
    let mut last_on_wire: Vec<Option<usize>> = vec![None; width];
    let mut seen: IndexMap<Comparator, usize> = IndexMap::new();

    for c in schedule.comparators() {
        let occurrence = seen.entry(*c).or_default();
        let idx = positions[c][*occurrence];
        *occurrence += 1;

        for wire in [c.lo(), c.hi()] {
            if let Some(prev) = last_on_wire[wire]
                && prev > idx
            {
                return Err(OrderViolation::ConflictReordered {
                    earlier: network[idx],
                    later: network[prev],
                    wire,
                });
            }
            last_on_wire[wire] = Some(idx);
        }
    }

    Ok(())
}

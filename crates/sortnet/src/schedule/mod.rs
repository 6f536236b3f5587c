//! Depth scheduling for presentation.
//!
//! Comparators that share no wire commute, so a network can be redrawn as a
//! sequence of depth levels where each level's comparators act
//! "simultaneously". This module derives that layout without touching the
//! network.
//!
//! # Phases
//!
//! 1. **Depth partition**: scan in execution order and place each comparator
//!    one level after the deepest level already using one of its wires.
//! 2. **Within-level ordering**: order each level by fewest interleaving
//!    neighbours, then widest span, then lowest wire, so drawings stay compact.
//!
//! The result depends only on the network's conflict structure. Any
//! reordering of wire-disjoint neighbours in the input yields the same
//! schedule.
//!
//! [`verify_schedule`] checks that a schedule is a valid re-linearization of
//! its network.

mod ordering;
mod topology;
mod types;
mod verification;


use tracing::debug;

use crate::comparator::Comparator;
use crate::error::{Error, Result};
use crate::network::ComparisonNetwork;

pub use types::{Level, Schedule};
pub use verification::{verify_schedule, OrderViolation};

/// Group `network` into ordered depth levels.
///
/// Fails with [`Error::EmptyNetwork`] if the network has no comparators.
pub fn schedule(network: &ComparisonNetwork) -> Result<Schedule> {
    if network.is_empty() {
        return Err(Error::EmptyNetwork);
    }

    let mut levels = topology::depth_levels(network.comparators());
    for level in &mut levels {
        ordering::order_level(level);
    }

    let schedule = Schedule { levels };
    debug!(
        comparators = schedule.comparator_count(),
        depth = schedule.depth(),
        "network scheduled"
    );
    Ok(schedule)
}

/// Canonical comparator order for display.
///
/// The result is a flattened [`schedule`]. The network's own comparator
/// order remains the execution order.
pub fn optimize(network: &ComparisonNetwork) -> Result<Vec<Comparator>> {
    Ok(schedule(network)?.into_comparators())
}

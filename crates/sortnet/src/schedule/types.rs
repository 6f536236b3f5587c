//! Depth levels and the canonical schedule.

use std::fmt;

use serde::Serialize;

use crate::comparator::Comparator;

/// A set of comparators with no shared wires, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Level {
    /// Comparators in this level. None of them touch a common wire.
    pub comparators: Vec<Comparator>,
}

impl Level {
    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }
}

/// A network's comparators grouped into depth levels.
///
/// Flattening the levels in order gives a valid re-linearization of the
/// network: any two comparators that share a wire keep their relative
/// execution order. The schedule is meant for presentation. Sorting and
/// verification always use the network's own order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Depth levels, shallowest first
    pub levels: Vec<Level>,
}

impl Schedule {
    /// Number of depth levels
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Total number of comparators
    pub fn comparator_count(&self) -> usize {
        self.levels.iter().map(Level::len).sum()
    }

    /// Comparators in canonical order
    pub fn comparators(&self) -> impl Iterator<Item = &Comparator> {
        self.levels.iter().flat_map(|l| l.comparators.iter())
    }

    /// Flatten the schedule into canonical order
    pub fn into_comparators(self) -> Vec<Comparator> {
        self.levels.into_iter().flat_map(|l| l.comparators).collect()
    }
}

/// Canonical display format: comparators of a level joined by `,`, levels
/// joined by newlines.
impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for (j, c) in level.comparators.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

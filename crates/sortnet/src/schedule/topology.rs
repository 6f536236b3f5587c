//! Depth partitioning of a comparator sequence.

use crate::comparator::Comparator;

use super::types::Level;

/// Assign each comparator to its depth level, preserving scan order inside
/// each level.
///
/// A comparator lands one level after the deepest level already holding a
/// comparator on either of its wires, or in level 0 if neither wire has been
/// used yet. Comparators that share a wire therefore keep their execution
/// order across levels, while wire-disjoint comparators may share a level.
pub(super) fn depth_levels(comparators: &[Comparator]) -> Vec<Level> {
    let Some(width) = comparators.iter().map(|c| c.hi() + 1).max() else {
        return Vec::new();
    };

    // Deepest level touching each wire so far
    let mut wire_depth: Vec<Option<usize>> = vec![None; width];
    let mut levels: Vec<Level> = Vec::new();

    for c in comparators {
        let depth = wire_depth[c.lo()]
            .max(wire_depth[c.hi()])
            .map_or(0, |d| d + 1);

        if depth == levels.len() {
            levels.push(Level::default());
        }
        levels[depth].comparators.push(*c);

        wire_depth[c.lo()] = Some(depth);
        wire_depth[c.hi()] = Some(depth);
    }

    levels
}

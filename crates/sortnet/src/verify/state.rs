//! Ternary wire states and search branches.

use std::fmt;

use serde::Serialize;

use crate::comparator::Comparator;

/// Value held by one wire during the symbolic search.
///
/// `Unknown` stands for a free input bit: a branch whose state holds `k`
/// unknowns represents all `2^k` binary vectors obtained by filling them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WireState {
    Zero,
    One,
    Unknown,
}

impl fmt::Display for WireState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            WireState::Zero => '0',
            WireState::One => '1',
            WireState::Unknown => 'U',
        };
        write!(f, "{c}")
    }
}

/// Render a state vector as a compact string, wire 0 first (e.g. `"0U1"`).
pub fn format_states(states: &[WireState]) -> String {
    states.iter().map(ToString::to_string).collect()
}

/// Outcome of applying one comparator to a branch.
pub(super) enum Step {
    /// The comparator was applied in place.
    Applied,
    /// Both wires were unknown. The branch continues as `(Unknown, One)` and
    /// the returned branch covers the `(Zero, Zero)` case.
    Split(Branch),
}

/// One pending class of inputs in the search.
#[derive(Debug, Clone)]
pub(super) struct Branch {
    /// Wire values, indexed by position.
    pub states: Vec<WireState>,
    /// Next comparator to apply.
    pub cursor: usize,
    /// Leftmost wire not yet known to be settled at zero.
    pub zero_bound: usize,
    /// Rightmost wire not yet known to be settled at one.
    pub one_bound: usize,
    /// Share of the input space this branch covers, `2^-splits`.
    pub weight: f64,
}

impl Branch {
    /// The branch covering every binary input of the given width.
    pub fn root(width: usize) -> Self {
        Self {
            states: vec![WireState::Unknown; width],
            cursor: 0,
            zero_bound: 0,
            one_bound: width.saturating_sub(1),
            weight: 1.0,
        }
    }

    /// Advance both bounds past settled wires and report whether every
    /// vector in this branch is already sorted.
    ///
    /// Wires left of `zero_bound` are zero and wires right of `one_bound` are
    /// one. No comparator can change either region, so the bounds only move
    /// inward. Once at most one unsettled wire remains, the branch has the
    /// shape `0..0 x 1..1` and stays sorted under any further comparators.
    pub fn settle(&mut self) -> bool {
        let n = self.states.len();
        while self.zero_bound < n && self.states[self.zero_bound] == WireState::Zero {
            self.zero_bound += 1;
        }
        while self.one_bound > self.zero_bound && self.states[self.one_bound] == WireState::One {
            self.one_bound -= 1;
        }
        self.zero_bound >= n || self.one_bound <= self.zero_bound
    }

    /// Apply `comparator` and advance the cursor.
    pub fn apply(&mut self, comparator: &Comparator) -> Step {
        use WireState::{One, Unknown, Zero};

        let (a, b) = (comparator.lo(), comparator.hi());
        self.cursor += 1;

        match (self.states[a], self.states[b]) {
            (Unknown, Unknown) => {
                self.weight /= 2.0;
                let mut zeros = self.clone();
                zeros.states[a] = Zero;
                zeros.states[b] = Zero;

                self.states[b] = One;
                Step::Split(zeros)
            }
            (x, y) if x != Zero && y != One => {
                self.states[a] = y;
                self.states[b] = x;
                Step::Applied
            }
            _ => Step::Applied,
        }
    }
}

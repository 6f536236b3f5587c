//! Comparison networks
//!
//! A [`ComparisonNetwork`] is an ordered list of comparators. The order is the
//! execution order: both sort operations apply comparators front to back, and
//! any reordering must keep comparators that share a wire in this order.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::comparator::Comparator;
use crate::error::{Error, Result};

/// Widest network `sort_binary_sequence` can represent.
pub const MAX_BINARY_WIDTH: usize = u64::BITS as usize;

/// An ordered sequence of comparators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonNetwork {
    comparators: Vec<Comparator>,
}

impl ComparisonNetwork {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a network from comparators in execution order
    pub fn from_comparators(comparators: Vec<Comparator>) -> Self {
        Self { comparators }
    }

    /// Parse the textual network format.
    ///
    /// Each line is split on `,` independently and the results are
    /// concatenated in line order. Empty tokens are skipped, so blank lines
    /// and trailing commas are accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let comparators = text
            .lines()
            .flat_map(|line| line.split(','))
            .filter(|token| !token.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Comparator>>>()?;

        trace!(comparators = comparators.len(), "network parsed");
        Ok(Self { comparators })
    }

    /// Append a comparator at the end of the execution order
    pub fn append(&mut self, comparator: Comparator) {
        self.comparators.push(comparator);
    }

    /// Append a comparator between two wires, in either order
    pub fn push(&mut self, a: usize, b: usize) -> Result<()> {
        self.append(Comparator::new(a, b)?);
        Ok(())
    }

    /// Remove the first comparator equal to `comparator`
    pub fn remove(&mut self, comparator: &Comparator) -> Result<()> {
        let idx = self
            .comparators
            .iter()
            .position(|c| c == comparator)
            .ok_or(Error::NotFound(*comparator))?;
        self.comparators.remove(idx);
        Ok(())
    }

    /// Comparators in execution order
    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comparator> {
        self.comparators.iter()
    }

    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    /// Highest wire position touched by any comparator
    pub fn max_input(&self) -> Result<usize> {
        self.comparators
            .iter()
            .map(Comparator::hi)
            .max()
            .ok_or(Error::EmptyNetwork)
    }

    /// Number of wires, `max_input() + 1`
    pub fn wire_count(&self) -> Result<usize> {
        Ok(self.max_input()? + 1)
    }

    /// Run the network over a bitstring where bit `k` holds wire `k`.
    ///
    /// Each comparator moves a one toward its higher wire. An empty network
    /// returns the input unchanged.
    pub fn sort_binary_sequence(&self, sequence: u64) -> Result<u64> {
        if let Ok(width) = self.wire_count()
            && width > MAX_BINARY_WIDTH
        {
            return Err(Error::WidthExceeded {
                width,
                max: MAX_BINARY_WIDTH,
            });
        }

        let mut result = sequence;
        for c in &self.comparators {
            let lo_bit = (result >> c.lo()) & 1;
            let hi_bit = (result >> c.hi()) & 1;
            if lo_bit > hi_bit {
                result ^= (1 << c.lo()) | (1 << c.hi());
            }
        }
        Ok(result)
    }

    /// Run the network over `items`, returning a new sorted vector.
    ///
    /// `items.len()` must equal the wire count. Equal elements are never
    /// swapped.
    pub fn sort_sequence<T: Ord + Clone>(&self, items: &[T]) -> Result<Vec<T>> {
        let mut result = items.to_vec();
        self.sort_in_place(&mut result)?;
        Ok(result)
    }

    /// Run the network over `items` in place.
    pub fn sort_in_place<T: Ord>(&self, items: &mut [T]) -> Result<()> {
        let expected = self.wire_count()?;
        if items.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: items.len(),
            });
        }

        for c in &self.comparators {
            if items[c.lo()] > items[c.hi()] {
                items.swap(c.lo(), c.hi());
            }
        }
        Ok(())
    }
}

impl fmt::Display for ComparisonNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.comparators.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for ComparisonNetwork {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Index<usize> for ComparisonNetwork {
    type Output = Comparator;

    fn index(&self, idx: usize) -> &Comparator {
        &self.comparators[idx]
    }
}

impl FromIterator<Comparator> for ComparisonNetwork {
    fn from_iter<I: IntoIterator<Item = Comparator>>(iter: I) -> Self {
        Self {
            comparators: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ComparisonNetwork {
    type Item = &'a Comparator;
    type IntoIter = std::slice::Iter<'a, Comparator>;

    fn into_iter(self) -> Self::IntoIter {
        self.comparators.iter()
    }
}

//! Compare-exchange operations
//!
//! A [`Comparator`] connects two distinct wires. After it runs, the smaller
//! value sits on the lower-numbered wire. Construction normalizes the pair so
//! `lo < hi` always holds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A compare-exchange between wires `lo` and `hi`, with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Comparator {
    lo: usize,
    hi: usize,
}

impl Comparator {
    /// Create a comparator between two wires, in either order.
    ///
    /// Fails if both positions name the same wire.
    pub fn new(a: usize, b: usize) -> Result<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { lo: a, hi: b }),
            std::cmp::Ordering::Greater => Ok(Self { lo: b, hi: a }),
            std::cmp::Ordering::Equal => Err(Error::invalid_comparator(
                format!("{a}:{b}"),
                "both positions name the same wire",
            )),
        }
    }

    /// Lower wire position
    pub fn lo(&self) -> usize {
        self.lo
    }

    /// Higher wire position
    pub fn hi(&self) -> usize {
        self.hi
    }

    /// Distance between the two wires
    pub fn span(&self) -> usize {
        self.hi - self.lo
    }

    /// True if both comparators touch at least one common wire.
    ///
    /// Conflicting comparators must keep their relative execution order.
    pub fn shares_wire(&self, other: &Comparator) -> bool {
        self.lo == other.lo || self.lo == other.hi || self.hi == other.lo || self.hi == other.hi
    }

    /// True if the `[lo, hi]` ranges cross without one nesting inside the other.
    pub fn interleaves(&self, other: &Comparator) -> bool {
        (self.lo < other.lo && other.lo < self.hi && self.hi < other.hi)
            || (other.lo < self.lo && self.lo < other.hi && other.hi < self.hi)
    }

    /// True if the closed `[lo, hi]` ranges have any position in common.
    pub fn intersects(&self, other: &Comparator) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lo, self.hi)
    }
}

impl FromStr for Comparator {
    type Err = Error;

    /// Parse a `"lo:hi"` token. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let mut parts = token.split(':');
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::invalid_comparator(
                token,
                "expected exactly two ':'-separated positions",
            ));
        };

        let parse_position = |field: &str| {
            let field = field.trim();
            field.parse::<usize>().map_err(|e| {
                Error::invalid_comparator(
                    token,
                    format!("position '{field}' is not a non-negative integer: {e}"),
                )
            })
        };

        let a = parse_position(a)?;
        let b = parse_position(b)?;
        Comparator::new(a, b)
            .map_err(|_| Error::invalid_comparator(token, "both positions name the same wire"))
    }
}

impl TryFrom<(usize, usize)> for Comparator {
    type Error = Error;

    fn try_from((a, b): (usize, usize)) -> Result<Self> {
        Comparator::new(a, b)
    }
}

impl From<Comparator> for (usize, usize) {
    fn from(c: Comparator) -> Self {
        (c.lo, c.hi)
    }
}

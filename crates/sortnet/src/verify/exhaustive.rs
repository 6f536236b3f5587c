//! Direct zero-one enumeration.
//!
//! Runs every binary input through [`ComparisonNetwork::sort_binary_sequence`].
//! This costs `O(m * 2^n)` and is only practical for small widths. It serves
//! as a reference for the ternary search.

use tracing::debug;

use crate::error::{Error, Result};
use crate::network::ComparisonNetwork;

/// Widest network the enumeration accepts.
pub const MAX_EXHAUSTIVE_WIDTH: usize = 63;

/// True if the low `width` bits of `bits` read as non-decreasing from wire 0,
/// i.e. every one sits above every zero.
pub fn is_sorted_bits(bits: u64, width: usize) -> bool {
    let ones = (bits & low_mask(width)).count_ones() as usize;
    let expected = low_mask(width) ^ low_mask(width - ones);
    bits & low_mask(width) == expected
}

fn low_mask(width: usize) -> u64 {
    if width >= u64::BITS as usize {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// First binary input (in increasing numeric order) the network fails to sort.
pub fn find_unsorted_input(network: &ComparisonNetwork) -> Result<Option<u64>> {
    let width = network.wire_count()?;
    if width > MAX_EXHAUSTIVE_WIDTH {
        return Err(Error::WidthExceeded {
            width,
            max: MAX_EXHAUSTIVE_WIDTH,
        });
    }

    for input in 0..(1u64 << width) {
        let output = network.sort_binary_sequence(input)?;
        if !is_sorted_bits(output, width) {
            debug!(input, output, width, "unsorted input found");
            return Ok(Some(input));
        }
    }
    Ok(None)
}

/// Decide the sorting-network property by enumerating all `2^n` inputs.
///
/// Returns `Ok(false)` for an empty network.
pub fn is_sorting_network_exhaustive(network: &ComparisonNetwork) -> Result<bool> {
    if network.is_empty() {
        return Ok(false);
    }
    Ok(find_unsorted_input(network)?.is_none())
}

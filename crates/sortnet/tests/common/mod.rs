//! Shared network constructions for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use sortnet::{Comparator, ComparisonNetwork};

/// Batcher's odd-even merge sort for any width.
pub fn odd_even_merge(width: usize) -> ComparisonNetwork {
    let mut net = ComparisonNetwork::new();
    let mut p = 1;
    while p < width {
        let mut k = p;
        while k >= 1 {
            let mut j = k % p;
            while j + k < width {
                for i in 0..k.min(width - j - k) {
                    if (i + j) / (2 * p) == (i + j + k) / (2 * p) {
                        net.push(i + j, i + j + k).unwrap();
                    }
                }
                j += 2 * k;
            }
            k /= 2;
        }
        p *= 2;
    }
    net
}

/// Bitonic sorter for a power-of-two width, with all comparators ascending.
pub fn bitonic(width: usize) -> ComparisonNetwork {
    assert!(width.is_power_of_two());
    let mut net = ComparisonNetwork::new();
    let mut k = 2;
    while k <= width {
        for block in (0..width).step_by(k) {
            for i in 0..k / 2 {
                net.push(block + i, block + k - 1 - i).unwrap();
            }
        }
        let mut j = k / 4;
        while j > 0 {
            for block in (0..width).step_by(2 * j) {
                for i in 0..j {
                    net.push(block + i, block + i + j).unwrap();
                }
            }
            j /= 2;
        }
        k *= 2;
    }
    net
}

/// `net` without the comparator at `idx`.
pub fn without(net: &ComparisonNetwork, idx: usize) -> ComparisonNetwork {
    net.iter()
        .enumerate()
        .filter(|(i, _)| *i != idx)
        .map(|(_, c)| *c)
        .collect::<ComparisonNetwork>()
}

pub fn comparator(lo: usize, hi: usize) -> Comparator {
    Comparator::new(lo, hi).unwrap()
}

/// Path to a sample network shipped in the repository's `networks/` directory.
pub fn sample_network_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../networks")
        .join(name)
}

pub fn read_sample_network(name: &str) -> ComparisonNetwork {
    let text = std::fs::read_to_string(sample_network_path(name)).unwrap();
    ComparisonNetwork::parse(&text).unwrap()
}

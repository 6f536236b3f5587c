//! Ternary branch-and-bound search over the zero-one input space.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};
use crate::network::ComparisonNetwork;

use super::progress::{ProgressObserver, ProgressTracker};
use super::state::{Branch, Step, WireState};

/// Result of a verification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    /// Whether the network sorts every input.
    pub is_sorting_network: bool,
    /// Number of wires (0 for an empty network).
    pub wire_count: usize,
    /// Number of comparators in the network.
    pub comparator_count: usize,
    /// Branches popped from the work list.
    pub branches_explored: usize,
    /// Output pattern of the first branch that ended unsorted.
    ///
    /// Every binary vector matching the pattern (filling `Unknown` wires with
    /// any bit) is produced by some input, and at least one of them is unsorted.
    pub unsorted_output: Option<Vec<WireState>>,
}

/// Configurable sorting-network verifier.
///
/// ```
/// use sortnet::{ComparisonNetwork, Verifier};
///
/// let net: ComparisonNetwork = "0:1,1:2,0:1".parse()?;
/// let report = Verifier::new().run(&net)?;
/// assert!(report.is_sorting_network);
/// # Ok::<(), sortnet::Error>(())
/// ```
#[derive(Default)]
pub struct Verifier<'a> {
    observer: Option<&'a mut dyn ProgressObserver>,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> Verifier<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report progress to `observer` while searching
    pub fn with_observer(mut self, observer: &'a mut dyn ProgressObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Stop with [`Error::Cancelled`] once `flag` is set.
    ///
    /// The flag is checked once per branch.
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Decide whether `network` sorts every input.
    ///
    /// An empty network is never a sorting network.
    #[instrument(skip_all, name = "verify", fields(comparators = network.len()))]
    pub fn run(self, network: &ComparisonNetwork) -> Result<VerificationReport> {
        let mut report = VerificationReport {
            is_sorting_network: false,
            wire_count: 0,
            comparator_count: network.len(),
            branches_explored: 0,
            unsorted_output: None,
        };

        if network.is_empty() {
            debug!("empty network is not a sorting network");
            return Ok(report);
        }

        let width = network.wire_count()?;
        report.wire_count = width;

        let comparators = network.comparators();
        let mut progress = ProgressTracker::new(self.observer);
        let mut stack = vec![Branch::root(width)];

        while let Some(mut branch) = stack.pop() {
            if let Some(flag) = self.cancel
                && flag.load(Ordering::Relaxed)
            {
                debug!(branches = report.branches_explored, "verification cancelled");
                return Err(Error::Cancelled);
            }

            report.branches_explored += 1;
            trace!(cursor = branch.cursor, pending = stack.len(), "branch popped");

            loop {
                if branch.settle() {
                    progress.complete(branch.weight);
                    break;
                }

                let Some(comparator) = comparators.get(branch.cursor) else {
                    progress.finish();
                    debug!(
                        wires = width,
                        branches = report.branches_explored,
                        "not a sorting network"
                    );
                    report.unsorted_output = Some(branch.states);
                    return Ok(report);
                };

                if let Step::Split(zeros) = branch.apply(comparator) {
                    stack.push(zeros);
                }
            }
        }

        progress.finish();
        debug!(
            wires = width,
            branches = report.branches_explored,
            completed = progress.completed(),
            "sorting network proven"
        );
        report.is_sorting_network = true;
        Ok(report)
    }
}

/// Decide whether `network` sorts every input sequence.
///
/// Returns `false` for an empty network.
pub fn is_sorting_network(network: &ComparisonNetwork) -> bool {
    Verifier::new()
        .run(network)
        .is_ok_and(|report| report.is_sorting_network)
}

//! Sorting-network verification.
//!
//! By the zero-one principle, a comparison network sorts every sequence over
//! any total order iff it sorts all `2^n` binary sequences. Instead of running
//! each binary input, [`Verifier`] searches over partially-known wire states.
//!
//! # Search
//!
//! Every wire holds `0`, `1` or `U` (unknown). The search starts from the
//! all-`U` state, which stands for every input. Comparators are applied one at
//! a time:
//!
//! - `(U, U)` splits the branch. A comparator maps the pairs
//!   `{00, 01, 10, 11}` onto `{00, 01, 11}`, which is exactly `{00}` together
//!   with `{U1}`. The `00` case is pushed onto the work list and the current
//!   branch continues as `U1`.
//! - `(1, U)`, `(1, 0)` and `(U, 0)` swap.
//! - Anything with `0` on the low wire or `1` on the high wire is unchanged.
//!
//! A branch whose state reaches `0..0 x 1..1` (at most one unsettled wire) is
//! sorted for every input it represents and is dropped. A branch that runs
//! out of comparators before that point is a counterexample class.
//!
//! The number of branches follows `T(k) = T(k-1) + T(k-2)`, giving
//! `O(m * phi^n)` instead of `O(m * 2^n)`. Width is bounded by memory, not by
//! machine word size.
//!
//! [`exhaustive`] keeps the direct enumeration as a reference.

pub mod exhaustive;
mod progress;
mod search;
mod state;


pub use exhaustive::{is_sorting_network_exhaustive, MAX_EXHAUSTIVE_WIDTH};
pub use progress::ProgressObserver;
pub use search::{is_sorting_network, VerificationReport, Verifier};
pub use state::{format_states, WireState};

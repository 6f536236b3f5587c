//! Sortnet
//!
//! Comparison networks, sorting-network verification and depth scheduling.
//!
//! - [`ComparisonNetwork`] runs comparators in order over bitstrings or any
//!   `Ord` sequence.
//! - [`Verifier`] decides whether a network sorts every input, using a ternary
//!   search over the zero-one input space.
//! - [`schedule()`] groups comparators into depth levels for display, and
//!   [`svg`] draws them.

pub mod comparator;
pub mod error;
pub mod network;
pub mod schedule;
pub mod svg;
pub mod verify;

pub use comparator::Comparator;
pub use error::{Error, Result};
pub use network::ComparisonNetwork;
pub use schedule::{optimize, schedule, verify_schedule, Level, Schedule};
pub use svg::{render_svg, SvgStyle};
pub use verify::{is_sorting_network, ProgressObserver, VerificationReport, Verifier, WireState};

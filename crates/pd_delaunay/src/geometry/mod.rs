//! The robust geometric predicate kernel.
//!
//! Purpose
//! - Expose `Point`/`Vector`, the small sign/side enums, and `Kernel`, the
//!   stateless object carrying the five predicates the optimizer needs.
//!
//! Why this design
//! - Split into `types` (data shapes and statistics bookkeeping) and
//!   `predicates` (the formulas and the filter/exact dispatch) so the
//!   arithmetic-heavy code is easy to review independently of the plumbing.

mod predicates;
mod types;

pub use predicates::Kernel;
pub use types::{
    clear_statistics, get_statistics_into, statistics_snapshot, KernelStatistics, Orientation,
    OrientedSide, Point, Vector,
};

#[cfg(test)]
mod tests;

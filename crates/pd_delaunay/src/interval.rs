//! Directed-rounding interval arithmetic over a generic scalar.
//!
//! Purpose
//! - Provide the cheap, inexact first pass of the filter-then-exact
//!   predicate pattern: enclosing intervals for `+`, `-`, `*`, plus sign and
//!   strict-less-than queries that report when the enclosure is too coarse
//!   to decide.
//!
//! Why this design
//! - Every bound is computed with the FPU rounding mode pinned outward
//!   (`rounding::DOWNWARD` for `lo`, `rounding::UPWARD` for `hi`) via a
//!   scoped guard, so the result is a true enclosure of the exact value even
//!   in the face of the non-associativity of floating point.
//! - Multiplication case-splits on the sign of each operand's bounds
//!   (`Neg`/`Pos`/`Mixed`/`Zero`) instead of a table-driven bit trick: each of
//!   the nine non-zero combinations is a separate match arm that computes
//!   and returns its bounds directly, so there is no shared fallthrough path
//!   for a future edit to silently break.
//! - `sign`/`lt` return `Result<_, Indeterminate>` rather than throwing: the
//!   kernel matches on this locally and never lets it escape (see
//!   `crate::errors`).

use crate::rounding::{with_mode, DOWNWARD, UPWARD};
use crate::Real;
use std::sync::atomic::{AtomicU64, Ordering};

/// Marker for "the interval straddles zero; no sign-exact filter answer".
///
/// Never returned to a caller outside this crate: the predicate kernel
/// catches it and escalates to exact arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Indeterminate;

static ARITHMETIC_OP_COUNT: AtomicU64 = AtomicU64::new(0);
static INDETERMINATE_RESULT_COUNT: AtomicU64 = AtomicU64::new(0);

/// Snapshot of the interval layer's own bookkeeping, distinct from the
/// predicate-level counters in [`crate::geometry::KernelStatistics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalStatistics {
    pub arithmetic_op_count: u64,
    pub indeterminate_result_count: u64,
}

/// Resets the interval layer's counters to zero.
pub fn clear_statistics() {
    ARITHMETIC_OP_COUNT.store(0, Ordering::Relaxed);
    INDETERMINATE_RESULT_COUNT.store(0, Ordering::Relaxed);
}

/// Reads the interval layer's counters.
pub fn statistics_snapshot() -> IntervalStatistics {
    IntervalStatistics {
        arithmetic_op_count: ARITHMETIC_OP_COUNT.load(Ordering::Relaxed),
        indeterminate_result_count: INDETERMINATE_RESULT_COUNT.load(Ordering::Relaxed),
    }
}

fn record_op() {
    ARITHMETIC_OP_COUNT.fetch_add(1, Ordering::Relaxed);
}

fn record_indeterminate() {
    INDETERMINATE_RESULT_COUNT.fetch_add(1, Ordering::Relaxed);
}

/// A closed real interval `[lo, hi]`, an outward-rounded enclosure of some
/// true real value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Interval<R> {
    lo: R,
    hi: R,
}

/// Sign classification of an interval's bounds, used to case-split
/// multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZonePos {
    /// `hi <= 0`
    Neg,
    /// `lo >= 0`
    Pos,
    /// `lo < 0 && hi > 0`
    Mixed,
    /// `lo == 0 && hi == 0`
    Zero,
}

impl<R: Real> Interval<R> {
    /// Builds `[lo, hi]`. `lo` must not exceed `hi`.
    pub(crate) fn new(lo: R, hi: R) -> Self {
        debug_assert!(lo <= hi, "interval bounds out of order");
        Interval { lo, hi }
    }

    /// A degenerate interval enclosing exactly `x`.
    pub(crate) fn singleton(x: R) -> Self {
        Interval { lo: x, hi: x }
    }

    pub(crate) fn lo(&self) -> R {
        self.lo
    }

    pub(crate) fn hi(&self) -> R {
        self.hi
    }

    fn zone(&self) -> ZonePos {
        if self.lo == R::zero() && self.hi == R::zero() {
            ZonePos::Zero
        } else if self.hi <= R::zero() {
            ZonePos::Neg
        } else if self.lo >= R::zero() {
            ZonePos::Pos
        } else {
            ZonePos::Mixed
        }
    }

    pub(crate) fn add(self, other: Self) -> Self {
        record_op();
        let lo = with_mode(DOWNWARD, || self.lo + other.lo);
        let hi = with_mode(UPWARD, || self.hi + other.hi);
        Interval::new(lo, hi)
    }

    pub(crate) fn sub(self, other: Self) -> Self {
        record_op();
        let lo = with_mode(DOWNWARD, || self.lo - other.hi);
        let hi = with_mode(UPWARD, || self.hi - other.lo);
        Interval::new(lo, hi)
    }

    pub(crate) fn neg(self) -> Self {
        Interval {
            lo: -self.hi,
            hi: -self.lo,
        }
    }

    pub(crate) fn mul(self, other: Self) -> Self {
        record_op();
        use ZonePos::*;
        if self.zone() == Zero || other.zone() == Zero {
            return Interval::new(R::zero(), R::zero());
        }
        let (lo, hi) = match (self.zone(), other.zone()) {
            (Neg, Neg) => (
                with_mode(DOWNWARD, || self.hi * other.hi),
                with_mode(UPWARD, || self.lo * other.lo),
            ),
            (Neg, Pos) => (
                with_mode(DOWNWARD, || self.lo * other.hi),
                with_mode(UPWARD, || self.hi * other.lo),
            ),
            (Neg, Mixed) => (
                with_mode(DOWNWARD, || self.lo * other.hi),
                with_mode(UPWARD, || self.lo * other.lo),
            ),
            (Pos, Neg) => (
                with_mode(DOWNWARD, || self.hi * other.lo),
                with_mode(UPWARD, || self.lo * other.hi),
            ),
            (Pos, Pos) => (
                with_mode(DOWNWARD, || self.lo * other.lo),
                with_mode(UPWARD, || self.hi * other.hi),
            ),
            (Pos, Mixed) => (
                with_mode(DOWNWARD, || self.hi * other.lo),
                with_mode(UPWARD, || self.hi * other.hi),
            ),
            (Mixed, Neg) => (
                with_mode(DOWNWARD, || self.hi * other.lo),
                with_mode(UPWARD, || self.lo * other.lo),
            ),
            (Mixed, Pos) => (
                with_mode(DOWNWARD, || self.lo * other.hi),
                with_mode(UPWARD, || self.hi * other.hi),
            ),
            (Mixed, Mixed) => (
                with_mode(DOWNWARD, || {
                    let a = self.lo * other.hi;
                    let b = self.hi * other.lo;
                    if a < b {
                        a
                    } else {
                        b
                    }
                }),
                with_mode(UPWARD, || {
                    let a = self.lo * other.lo;
                    let b = self.hi * other.hi;
                    if a > b {
                        a
                    } else {
                        b
                    }
                }),
            ),
            (Zero, _) | (_, Zero) => unreachable!("zero zone handled above"),
        };
        Interval::new(lo, hi)
    }

    /// `+1` if strictly positive, `-1` if strictly negative, `0` if the
    /// interval is the exact singleton zero, or `Err(Indeterminate)` if it
    /// straddles zero without being exactly zero.
    pub(crate) fn sign(&self) -> Result<i32, Indeterminate> {
        if self.lo > R::zero() {
            Ok(1)
        } else if self.hi < R::zero() {
            Ok(-1)
        } else if self.lo == R::zero() && self.hi == R::zero() {
            Ok(0)
        } else {
            record_indeterminate();
            Err(Indeterminate)
        }
    }

    /// Strict less-than: `true` if `self.hi < other.lo`, `false` if
    /// `self.lo >= other.hi`, indeterminate otherwise.
    pub(crate) fn lt(&self, other: &Self) -> Result<bool, Indeterminate> {
        if self.hi < other.lo {
            Ok(true)
        } else if self.lo >= other.hi {
            Ok(false)
        } else {
            record_indeterminate();
            Err(Indeterminate)
        }
    }
}

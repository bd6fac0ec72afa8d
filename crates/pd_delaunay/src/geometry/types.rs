//! Point/vector aliases and the small enums the predicates return.

use std::sync::atomic::{AtomicU64, Ordering};

/// An immutable 2D point. Equality is bitwise on components.
pub type Point<R> = nalgebra::Point2<R>;

/// A 2D direction or offset, structurally identical to [`Point`].
pub type Vector<R> = nalgebra::Vector2<R>;

/// The sign of a 2×2 orientation determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    RightTurn = -1,
    Collinear = 0,
    LeftTurn = 1,
}

impl Orientation {
    pub(crate) fn from_sign(sign: i32) -> Self {
        match sign.signum() {
            -1 => Orientation::RightTurn,
            0 => Orientation::Collinear,
            1 => Orientation::LeftTurn,
            _ => unreachable!("i32::signum only returns -1, 0, or 1"),
        }
    }
}

/// Which side of an oriented circle a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientedSide {
    OnNegativeSide = -1,
    OnBoundary = 0,
    OnPositiveSide = 1,
}

impl OrientedSide {
    pub(crate) fn from_sign(sign: i32) -> Self {
        match sign.signum() {
            -1 => OrientedSide::OnNegativeSide,
            0 => OrientedSide::OnBoundary,
            1 => OrientedSide::OnPositiveSide,
            _ => unreachable!("i32::signum only returns -1, 0, or 1"),
        }
    }
}

macro_rules! counter_pair {
    ($total:ident, $exact:ident) => {
        static $total: AtomicU64 = AtomicU64::new(0);
        static $exact: AtomicU64 = AtomicU64::new(0);
    };
}

counter_pair!(ORIENTATION_TOTAL, ORIENTATION_EXACT);
counter_pair!(SIDE_OF_ORIENTED_CIRCLE_TOTAL, SIDE_OF_ORIENTED_CIRCLE_EXACT);
counter_pair!(PREFERRED_DIRECTION_TOTAL, PREFERRED_DIRECTION_EXACT);

pub(crate) enum PredicateKind {
    Orientation,
    SideOfOrientedCircle,
    PreferredDirection,
}

pub(crate) fn record_call(kind: PredicateKind) {
    match kind {
        PredicateKind::Orientation => ORIENTATION_TOTAL.fetch_add(1, Ordering::Relaxed),
        PredicateKind::SideOfOrientedCircle => {
            SIDE_OF_ORIENTED_CIRCLE_TOTAL.fetch_add(1, Ordering::Relaxed)
        }
        PredicateKind::PreferredDirection => {
            PREFERRED_DIRECTION_TOTAL.fetch_add(1, Ordering::Relaxed)
        }
    };
}

pub(crate) fn record_exact(kind: PredicateKind) {
    match kind {
        PredicateKind::Orientation => ORIENTATION_EXACT.fetch_add(1, Ordering::Relaxed),
        PredicateKind::SideOfOrientedCircle => {
            SIDE_OF_ORIENTED_CIRCLE_EXACT.fetch_add(1, Ordering::Relaxed)
        }
        PredicateKind::PreferredDirection => {
            PREFERRED_DIRECTION_EXACT.fetch_add(1, Ordering::Relaxed)
        }
    };
}

/// Snapshot of the six process-wide predicate-call counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KernelStatistics {
    pub orientation_total_count: u64,
    pub orientation_exact_count: u64,
    pub side_of_oriented_circle_total_count: u64,
    pub side_of_oriented_circle_exact_count: u64,
    pub preferred_direction_total_count: u64,
    pub preferred_direction_exact_count: u64,
}

/// Resets all six predicate counters to zero.
pub fn clear_statistics() {
    ORIENTATION_TOTAL.store(0, Ordering::Relaxed);
    ORIENTATION_EXACT.store(0, Ordering::Relaxed);
    SIDE_OF_ORIENTED_CIRCLE_TOTAL.store(0, Ordering::Relaxed);
    SIDE_OF_ORIENTED_CIRCLE_EXACT.store(0, Ordering::Relaxed);
    PREFERRED_DIRECTION_TOTAL.store(0, Ordering::Relaxed);
    PREFERRED_DIRECTION_EXACT.store(0, Ordering::Relaxed);
}

/// Copies the current counters into `out`, the out-parameter form kept for
/// parity with the predecessor's `get_statistics(Statistics&)`.
pub fn get_statistics_into(out: &mut KernelStatistics) {
    *out = statistics_snapshot();
}

/// Returns a fresh owned snapshot of the current counters.
pub fn statistics_snapshot() -> KernelStatistics {
    KernelStatistics {
        orientation_total_count: ORIENTATION_TOTAL.load(Ordering::Relaxed),
        orientation_exact_count: ORIENTATION_EXACT.load(Ordering::Relaxed),
        side_of_oriented_circle_total_count: SIDE_OF_ORIENTED_CIRCLE_TOTAL.load(Ordering::Relaxed),
        side_of_oriented_circle_exact_count: SIDE_OF_ORIENTED_CIRCLE_EXACT.load(Ordering::Relaxed),
        preferred_direction_total_count: PREFERRED_DIRECTION_TOTAL.load(Ordering::Relaxed),
        preferred_direction_exact_count: PREFERRED_DIRECTION_EXACT.load(Ordering::Relaxed),
    }
}

//! Filter-then-exact evaluation of the five geometric predicates.
//!
//! Purpose
//! - Each predicate is defined once as a formula generic over a small
//!   arithmetic capability (`NumberLike`), then evaluated first over
//!   `Interval<R>` and, only if that comes back indeterminate, over
//!   `Exact`: one formula, two number types.
//!
//! Why this design
//! - Keeping the formula generic means the interval and exact passes can
//!   never drift apart (a frequent bug source in hand-duplicated
//!   filter/exact pairs): there is exactly one place that encodes, say, the
//!   in-circle determinant.

use crate::exact::Exact;
use crate::geometry::types::{
    record_call, record_exact, Orientation, OrientedSide, Point, PredicateKind,
    Vector,
};
use crate::interval::{Indeterminate, Interval};
use crate::Real;

/// The arithmetic a predicate formula needs: addition, subtraction,
/// multiplication, and negation. Implemented by both the interval filter
/// and the exact fallback, so formulas below are written once.
trait NumberLike: Sized + Clone {
    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn neg(&self) -> Self;
}

impl<R: Real> NumberLike for Interval<R> {
    fn add(&self, other: &Self) -> Self {
        Interval::add(*self, *other)
    }
    fn sub(&self, other: &Self) -> Self {
        Interval::sub(*self, *other)
    }
    fn mul(&self, other: &Self) -> Self {
        Interval::mul(*self, *other)
    }
    fn neg(&self) -> Self {
        Interval::neg(*self)
    }
}

impl NumberLike for Exact {
    fn add(&self, other: &Self) -> Self {
        self + other
    }
    fn sub(&self, other: &Self) -> Self {
        self - other
    }
    fn mul(&self, other: &Self) -> Self {
        self * other
    }
    fn neg(&self) -> Self {
        -self.clone()
    }
}

/// `(ax - cx)(by - cy) - (ay - cy)(bx - cx)`, the signed orientation
/// determinant, generic over the number representation.
fn orientation_formula<N: NumberLike>(ax: &N, ay: &N, bx: &N, by: &N, cx: &N, cy: &N) -> N {
    let left = ax.sub(cx).mul(&by.sub(cy));
    let right = ay.sub(cy).mul(&bx.sub(cx));
    left.sub(&right)
}

/// The 3x3 in-circle determinant, expanded about the row for `d`, i.e. the
/// determinant of the rows `(a - d, |a-d|^2)`, `(b - d, |b-d|^2)`,
/// `(c - d, |c-d|^2)`.
#[allow(clippy::too_many_arguments)]
fn side_of_oriented_circle_formula<N: NumberLike>(
    ax: &N, ay: &N, bx: &N, by: &N, cx: &N, cy: &N, dx: &N, dy: &N,
) -> N {
    let qx = [ax.sub(dx), bx.sub(dx), cx.sub(dx)];
    let qy = [ay.sub(dy), by.sub(dy), cy.sub(dy)];
    let qz: Vec<N> = qx
        .iter()
        .zip(qy.iter())
        .map(|(x, y)| x.mul(x).add(&y.mul(y)))
        .collect();

    // det | qx0 qy0 qz0 |
    //     | qx1 qy1 qz1 |
    //     | qx2 qy2 qz2 |
    let m00 = qy[1].mul(&qz[2]).sub(&qy[2].mul(&qz[1]));
    let m01 = qx[1].mul(&qz[2]).sub(&qx[2].mul(&qz[1]));
    let m02 = qx[1].mul(&qy[2]).sub(&qx[2].mul(&qy[1]));

    qx[0]
        .mul(&m00)
        .sub(&qy[0].mul(&m01))
        .add(&qz[0].mul(&m02))
}

/// `|s_cd|^2 (s_ab . v)^2 - |s_ab|^2 (s_cd . v)^2`.
#[allow(clippy::too_many_arguments)]
fn preferred_direction_formula<N: NumberLike>(
    abx: &N, aby: &N, cdx: &N, cdy: &N, vx: &N, vy: &N,
) -> N {
    let ab_len2 = abx.mul(abx).add(&aby.mul(aby));
    let cd_len2 = cdx.mul(cdx).add(&cdy.mul(cdy));
    let ab_dot_v = abx.mul(vx).add(&aby.mul(vy));
    let cd_dot_v = cdx.mul(vx).add(&cdy.mul(vy));
    let left = cd_len2.mul(&ab_dot_v.mul(&ab_dot_v));
    let right = ab_len2.mul(&cd_dot_v.mul(&cd_dot_v));
    left.sub(&right)
}

fn to_interval<R: Real>(x: R) -> Interval<R> {
    Interval::singleton(x)
}

fn to_exact<R: Real>(x: R) -> Exact {
    Exact::from_real(x)
}

/// Stateless capability object exposing the five geometric predicates.
///
/// `Kernel` carries no per-instance state; all bookkeeping lives in the
/// process-wide counters read through [`KernelStatistics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Kernel;

impl Kernel {
    pub fn new() -> Self {
        Kernel
    }

    /// Signed orientation of the ordered triple `(a, b, c)`.
    pub fn orientation<R: Real>(&self, a: Point<R>, b: Point<R>, c: Point<R>) -> Orientation {
        record_call(PredicateKind::Orientation);
        let iv = |x: R| to_interval(x);
        let interval_result = orientation_formula(
            &iv(a.x), &iv(a.y), &iv(b.x), &iv(b.y), &iv(c.x), &iv(c.y),
        )
        .sign();
        let sign = match interval_result {
            Ok(s) => s,
            Err(Indeterminate) => {
                record_exact(PredicateKind::Orientation);
                let ex = |x: R| to_exact(x);
                orientation_formula(
                    &ex(a.x), &ex(a.y), &ex(b.x), &ex(b.y), &ex(c.x), &ex(c.y),
                )
                .sign()
            }
        };
        Orientation::from_sign(sign)
    }

    /// Which side of the oriented circle through `a, b, c` contains `d`.
    pub fn side_of_oriented_circle<R: Real>(
        &self,
        a: Point<R>,
        b: Point<R>,
        c: Point<R>,
        d: Point<R>,
    ) -> OrientedSide {
        record_call(PredicateKind::SideOfOrientedCircle);
        let iv = |x: R| to_interval(x);
        let interval_result = side_of_oriented_circle_formula(
            &iv(a.x), &iv(a.y), &iv(b.x), &iv(b.y), &iv(c.x), &iv(c.y), &iv(d.x), &iv(d.y),
        )
        .sign();
        let sign = match interval_result {
            Ok(s) => s,
            Err(Indeterminate) => {
                record_exact(PredicateKind::SideOfOrientedCircle);
                let ex = |x: R| to_exact(x);
                side_of_oriented_circle_formula(
                    &ex(a.x), &ex(a.y), &ex(b.x), &ex(b.y), &ex(c.x), &ex(c.y), &ex(d.x), &ex(d.y),
                )
                .sign()
            }
        };
        OrientedSide::from_sign(sign)
    }

    /// Compares how aligned edge `ab` and edge `cd` are with direction `v`:
    /// positive when `ab` is the better-aligned edge, negative when `cd` is.
    pub fn preferred_direction<R: Real>(
        &self,
        a: Point<R>,
        b: Point<R>,
        c: Point<R>,
        d: Point<R>,
        v: Vector<R>,
    ) -> i32 {
        record_call(PredicateKind::PreferredDirection);
        let ab = b - a;
        let cd = d - c;
        let iv = |x: R| to_interval(x);
        let interval_result = preferred_direction_formula(
            &iv(ab.x), &iv(ab.y), &iv(cd.x), &iv(cd.y), &iv(v.x), &iv(v.y),
        )
        .sign();
        match interval_result {
            Ok(s) => s,
            Err(Indeterminate) => {
                record_exact(PredicateKind::PreferredDirection);
                let ex = |x: R| to_exact(x);
                preferred_direction_formula(
                    &ex(ab.x), &ex(ab.y), &ex(cd.x), &ex(cd.y), &ex(v.x), &ex(v.y),
                )
                .sign()
            }
        }
    }

    /// `true` iff `a, b, c, d` (in CCW order) form a strictly convex
    /// quadrilateral: every interior turn is a left turn.
    pub fn is_strictly_convex_quad<R: Real>(
        &self,
        a: Point<R>,
        b: Point<R>,
        c: Point<R>,
        d: Point<R>,
    ) -> bool {
        self.orientation(a, b, c) == Orientation::LeftTurn
            && self.orientation(b, c, d) == Orientation::LeftTurn
            && self.orientation(c, d, a) == Orientation::LeftTurn
            && self.orientation(d, a, b) == Orientation::LeftTurn
    }

    /// `false` iff `d` lies strictly inside the circumcircle of `a, b, c`
    /// (i.e. flipping would strictly improve the in-circle criterion).
    pub fn is_locally_delaunay_edge<R: Real>(
        &self,
        a: Point<R>,
        b: Point<R>,
        c: Point<R>,
        d: Point<R>,
    ) -> bool {
        self.side_of_oriented_circle(a, b, c, d) != OrientedSide::OnPositiveSide
    }

    /// Locally Delaunay, with cocircular ties between the two diagonals of
    /// a quad broken by preference for direction `u`, then `v`.
    pub fn is_locally_pd_delaunay_edge<R: Real>(
        &self,
        a: Point<R>,
        b: Point<R>,
        c: Point<R>,
        d: Point<R>,
        u: Vector<R>,
        v: Vector<R>,
    ) -> bool {
        match self.side_of_oriented_circle(a, b, c, d) {
            OrientedSide::OnNegativeSide => true,
            OrientedSide::OnPositiveSide => false,
            OrientedSide::OnBoundary => {
                let by_u = self.preferred_direction(c, a, b, d, u);
                if by_u != 0 {
                    by_u > 0
                } else {
                    self.preferred_direction(c, a, b, d, v) > 0
                }
            }
        }
    }
}

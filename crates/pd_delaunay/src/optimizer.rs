//! The flip-based PD-Delaunay optimizer.
//!
//! Purpose
//! - Drive an external [`Mesh`] to a fixed point where every interior,
//!   strictly-convex-quad halfedge is locally PD-Delaunay, by repeatedly
//!   flipping non-conforming diagonals.
//!
//! Why this design
//! - Two collections carry the whole algorithm: a FIFO of suspect
//!   halfedges and a hash set of halfedges already certified optimal.
//!   Flipping an edge invalidates the certification of its four
//!   surrounding halfedges, so those (and only those) get pulled back out
//!   of the optimal set and re-queued — this keeps the optimal set
//!   symmetric (`h` and `opposite(h)` always inserted/removed together)
//!   without needing a second pass to restore that invariant.
//! - Termination follows from the predicate's lexicographic objective
//!   (circumcircle containment, then alignment with `u`, then with `v`):
//!   each flip strictly improves it, and the mesh has finitely many
//!   triangulations, so the suspect queue empties in finitely many steps
//!   even on fully cocircular input.

use crate::errors::PreconditionViolation;
use crate::geometry::{Kernel, Point, Vector};
use crate::mesh::Mesh;
use crate::Real;
use std::collections::{HashSet, VecDeque};

/// Summary of one `optimize` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptimizerReport {
    /// Number of edge flips performed.
    pub flip_count: usize,
    /// Number of halfedges in the optimal set when the run finished (always
    /// even, since the set is symmetric).
    pub optimal_set_size: usize,
}

/// Drives a [`Mesh`] to a PD-Delaunay fixed point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optimizer {
    kernel: Kernel,
}

impl Optimizer {
    pub fn new() -> Self {
        Optimizer {
            kernel: Kernel::new(),
        }
    }

    /// The first tie-break direction used by [`Optimizer::optimize_default`].
    pub fn default_u<R: Real>() -> Vector<R> {
        Vector::new(R::one(), R::zero())
    }

    /// The second tie-break direction used by [`Optimizer::optimize_default`].
    pub fn default_v<R: Real>() -> Vector<R> {
        Vector::new(R::one(), R::one())
    }

    /// Runs [`Optimizer::optimize`] with the fixed directions `u = (1, 0)`,
    /// `v = (1, 1)`.
    pub fn optimize_default<R, M>(&self, mesh: &mut M) -> Result<OptimizerReport, PreconditionViolation>
    where
        R: Real,
        M: Mesh<R>,
    {
        self.optimize(mesh, Self::default_u(), Self::default_v())
    }

    /// Flips non-conforming interior diagonals of `mesh` until every
    /// flippable halfedge is locally PD-Delaunay with respect to the
    /// tie-break directions `u`, `v`.
    pub fn optimize<R, M>(
        &self,
        mesh: &mut M,
        u: Vector<R>,
        v: Vector<R>,
    ) -> Result<OptimizerReport, PreconditionViolation>
    where
        R: Real,
        M: Mesh<R>,
    {
        check_tie_break_vectors(u, v)?;

        let mut optimal_set: HashSet<M::HalfedgeId> = HashSet::new();
        let mut suspects: VecDeque<M::HalfedgeId> = VecDeque::new();

        for h in mesh.halfedges() {
            if mesh.is_border(h) {
                continue;
            }
            let quad = quad_of(mesh, h);
            if !self.kernel.is_strictly_convex_quad(quad.a, quad.b, quad.c, quad.d) {
                continue;
            }
            suspects.push_back(h);
        }

        let mut flip_count = 0usize;

        while let Some(h) = suspects.pop_front() {
            if optimal_set.contains(&h) {
                continue;
            }

            let quad = quad_of(mesh, h);
            let ok = self
                .kernel
                .is_locally_pd_delaunay_edge(quad.a, quad.b, quad.c, quad.d, u, v);

            if ok {
                optimal_set.insert(h);
                optimal_set.insert(mesh.opposite(h));
                continue;
            }

            mesh.flip(h)?;
            flip_count += 1;

            let h_opp = mesh.opposite(h);
            optimal_set.insert(h);
            optimal_set.insert(h_opp);

            let disturbed = [
                mesh.next(h),
                mesh.prev(h),
                mesh.next(h_opp),
                mesh.prev(h_opp),
            ];
            for n in disturbed {
                if optimal_set.remove(&n) {
                    let n_opp = mesh.opposite(n);
                    optimal_set.remove(&n_opp);
                    suspects.push_back(n);
                    suspects.push_back(n_opp);
                }
            }
        }

        Ok(OptimizerReport {
            flip_count,
            optimal_set_size: optimal_set.len(),
        })
    }
}

struct Quad<R: Real> {
    a: Point<R>,
    b: Point<R>,
    c: Point<R>,
    d: Point<R>,
}

fn quad_of<R, M>(mesh: &M, h: M::HalfedgeId) -> Quad<R>
where
    R: Real,
    M: Mesh<R>,
{
    let h_opp = mesh.opposite(h);
    Quad {
        a: mesh.vertex(h_opp),
        b: mesh.vertex(mesh.next(h)),
        c: mesh.vertex(h),
        d: mesh.vertex(mesh.next(h_opp)),
    }
}

fn check_tie_break_vectors<R: Real>(u: Vector<R>, v: Vector<R>) -> Result<(), PreconditionViolation> {
    let zero = R::zero();
    if (u.x == zero && u.y == zero) || (v.x == zero && v.y == zero) {
        return Err(PreconditionViolation::new(
            "tie-break direction vectors must be non-zero",
        ));
    }
    let cross = u.x * v.y - u.y * v.x;
    if cross == zero {
        return Err(PreconditionViolation::new(
            "tie-break direction vectors must not be parallel",
        ));
    }
    let dot = u.x * v.x + u.y * v.y;
    if dot == zero {
        return Err(PreconditionViolation::new(
            "tie-break direction vectors must not be orthogonal",
        ));
    }
    Ok(())
}

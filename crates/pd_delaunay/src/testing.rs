//! A small array-indexed halfedge mesh for exercising the optimizer.
//!
//! Purpose
//! - The optimizer's [`crate::mesh::Mesh`] contract has no mesh
//!   implementation of its own (construction from raw points, OFF I/O, and
//!   general mesh maintenance are out of scope). This module gives tests
//!   and benches a minimal, concrete implementation to drive against.
//!
//! Why this design
//! - Flat `Vec<usize>` arrays indexed by halfedge id, in the same spirit as
//!   the flat `triangles`/`halfedges` arrays a Delaunay triangulator builds,
//!   generalized to a full doubly-connected edge list (explicit `next`,
//!   `prev`, `opposite`, and a `border` flag per halfedge) since the mesh
//!   contract needs addressable border halfedges, which a bare
//!   `triangles[3*i + k]`-style encoding can't represent.
//! - `flip` is the textbook constant-time halfedge-mesh edge flip: the four
//!   surrounding halfedges keep their identities and target vertices and
//!   are only relinked into two new face cycles; only the diagonal pair's
//!   own target vertices change.

use crate::errors::PreconditionViolation;
use crate::geometry::Point;
use crate::mesh::Mesh;

/// A fixed, hand-built triangulated quadrilateral.
pub struct ArrayMesh {
    points: Vec<Point<f64>>,
    target: Vec<usize>,
    next: Vec<usize>,
    prev: Vec<usize>,
    opposite: Vec<usize>,
    border: Vec<bool>,
}

impl ArrayMesh {
    fn from_arrays(
        points: Vec<Point<f64>>,
        target: Vec<usize>,
        next: Vec<usize>,
        prev: Vec<usize>,
        opposite: Vec<usize>,
        border: Vec<bool>,
    ) -> Self {
        ArrayMesh {
            points,
            target,
            next,
            prev,
            opposite,
            border,
        }
    }

    /// A convex, non-cocircular quadrilateral `A(0,0), B(2,-1), C(4,0),
    /// D(2,5)` already triangulated along its short diagonal `A-C`, which
    /// is the Delaunay diagonal (`D` lies outside the circumcircle of
    /// `A, B, C`). Optimizing this mesh performs zero flips.
    pub fn kite_already_optimal() -> Self {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, -1.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 5.0),
        ];
        // Diagonal h = id0: A -> C.
        let target = vec![2, 0, 1, 0, 3, 2, 2, 1, 0, 3];
        let next = vec![2, 4, 3, 0, 5, 1, 9, 6, 7, 8];
        let prev = vec![3, 5, 0, 2, 1, 4, 7, 8, 9, 6];
        let opposite = vec![1, 0, 6, 7, 8, 9, 2, 3, 4, 5];
        let border = vec![
            false, false, false, false, false, false, true, true, true, true,
        ];
        ArrayMesh::from_arrays(points, target, next, prev, opposite, border)
    }

    /// The same four points as [`ArrayMesh::kite_already_optimal`], but
    /// triangulated along the non-Delaunay diagonal `B-D`. Optimizing this
    /// mesh flips exactly once, to the `A-C` diagonal.
    pub fn kite_needs_one_flip() -> Self {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, -1.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 5.0),
        ];
        // Diagonal h = id0: B -> D.
        let target = vec![3, 1, 2, 1, 0, 3, 3, 2, 1, 0];
        let next = vec![2, 4, 3, 0, 5, 1, 9, 6, 7, 8];
        let prev = vec![3, 5, 0, 2, 1, 4, 7, 8, 9, 6];
        let opposite = vec![1, 0, 6, 7, 8, 9, 2, 3, 4, 5];
        let border = vec![
            false, false, false, false, false, false, true, true, true, true,
        ];
        ArrayMesh::from_arrays(points, target, next, prev, opposite, border)
    }
}

impl Mesh<f64> for ArrayMesh {
    type HalfedgeId = usize;

    fn halfedges(&self) -> Vec<usize> {
        (0..self.target.len()).collect()
    }

    fn opposite(&self, h: usize) -> usize {
        self.opposite[h]
    }

    fn next(&self, h: usize) -> usize {
        self.next[h]
    }

    fn prev(&self, h: usize) -> usize {
        self.prev[h]
    }

    fn vertex(&self, h: usize) -> Point<f64> {
        self.points[self.target[h]]
    }

    fn is_border(&self, h: usize) -> bool {
        self.border[h]
    }

    fn flip(&mut self, h: usize) -> Result<(), PreconditionViolation> {
        let oh = self.opposite[h];
        if self.border[h] || self.border[oh] {
            return Err(PreconditionViolation::new(
                "cannot flip a halfedge on the mesh boundary",
            ));
        }
        let n = self.next[h];
        let p = self.prev[h];
        let n2 = self.next[oh];
        let p2 = self.prev[oh];

        let new_target_h = self.target[n2];
        let new_target_oh = self.target[n];
        self.target[h] = new_target_h;
        self.target[oh] = new_target_oh;

        self.next[h] = p2;
        self.next[p2] = n;
        self.next[n] = h;
        self.prev[p2] = h;
        self.prev[n] = p2;
        self.prev[h] = n;

        self.next[oh] = p;
        self.next[p] = n2;
        self.next[n2] = oh;
        self.prev[p] = oh;
        self.prev[n2] = p;
        self.prev[oh] = n2;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Kernel;

    fn quad(mesh: &ArrayMesh, h: usize) -> (Point<f64>, Point<f64>, Point<f64>, Point<f64>) {
        let oh = mesh.opposite(h);
        (
            mesh.vertex(oh),
            mesh.vertex(mesh.next(h)),
            mesh.vertex(h),
            mesh.vertex(mesh.next(oh)),
        )
    }

    #[test]
    fn kite_already_optimal_has_convex_quad_on_its_diagonal() {
        let mesh = ArrayMesh::kite_already_optimal();
        let k = Kernel::new();
        let (a, b, c, d) = quad(&mesh, 0);
        assert!(k.is_strictly_convex_quad(a, b, c, d));
        assert!(k.is_locally_delaunay_edge(a, b, c, d));
    }

    #[test]
    fn kite_needs_one_flip_has_convex_but_non_delaunay_quad() {
        let mesh = ArrayMesh::kite_needs_one_flip();
        let k = Kernel::new();
        let (a, b, c, d) = quad(&mesh, 0);
        assert!(k.is_strictly_convex_quad(a, b, c, d));
        assert!(!k.is_locally_delaunay_edge(a, b, c, d));
    }

    #[test]
    fn flip_is_its_own_inverse() {
        let mut mesh = ArrayMesh::kite_needs_one_flip();
        let before: Vec<_> = (0..10).map(|h| mesh.vertex(h)).collect();
        mesh.flip(0).unwrap();
        mesh.flip(0).unwrap();
        let after: Vec<_> = (0..10).map(|h| mesh.vertex(h)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn flip_rejects_border_halfedge() {
        let mut mesh = ArrayMesh::kite_already_optimal();
        let border_id = (0..10).find(|&h| mesh.is_border(h)).unwrap();
        assert!(mesh.flip(border_id).is_err());
    }
}

//! The halfedge capability contract the optimizer consumes.
//!
//! Purpose
//! - Describe the minimal operations a triangle mesh must expose for the
//!   optimizer to traverse and flip it, without depending on any one
//!   concrete mesh representation.
//!
//! Why this design
//! - A trait, not a concrete struct: the mesh is an external collaborator
//!   (construction from raw points, OFF I/O, and general mesh maintenance
//!   are out of scope here). Any halfedge structure — array-indexed,
//!   pointer-linked, arena-plus-generation-index — can implement it as long
//!   as halfedge identities stay stable across a `flip`.

use crate::errors::PreconditionViolation;
use crate::geometry::Point;
use crate::Real;

/// The halfedge operations the optimizer needs, each expected to be O(1)
/// amortized.
pub trait Mesh<R: Real> {
    /// Opaque, stable identity for one directed side of an edge.
    type HalfedgeId: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// All halfedges currently in the mesh. Order is whatever the
    /// implementation yields; callers that need reproducible output across
    /// mesh implementations must supply one with deterministic order.
    fn halfedges(&self) -> Vec<Self::HalfedgeId>;

    /// The twin halfedge of the same undirected edge. Must be an
    /// involution: `opposite(opposite(h)) == h`.
    fn opposite(&self, h: Self::HalfedgeId) -> Self::HalfedgeId;

    /// The next halfedge around `h`'s incident face.
    fn next(&self, h: Self::HalfedgeId) -> Self::HalfedgeId;

    /// The previous halfedge around `h`'s incident face.
    fn prev(&self, h: Self::HalfedgeId) -> Self::HalfedgeId;

    /// The point at the head (destination) of `h`.
    fn vertex(&self, h: Self::HalfedgeId) -> Point<R>;

    /// `true` iff `h` has no interior face on its side.
    fn is_border(&self, h: Self::HalfedgeId) -> bool;

    /// Replaces the diagonal `h` of its quadrilateral with the other
    /// diagonal. `h` and `opposite(h)` keep their identities; the four
    /// surrounding halfedges keep theirs too, with updated face/vertex
    /// relations. The caller guarantees the quad is strictly convex.
    fn flip(&mut self, h: Self::HalfedgeId) -> Result<(), PreconditionViolation>;
}

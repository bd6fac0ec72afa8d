//! The scalar type predicates and interval arithmetic are generic over.
//!
//! Purpose
//! - Bound the floating-point type `R` used throughout the kernel by the
//!   small capability set interval arithmetic and exact conversion actually
//!   need, instead of hard-coding `f64` everywhere.
//!
//! Why this design
//! - `num_traits::Float` already gives us the arithmetic and comparisons we
//!   need; we add only what it doesn't: directed-rounding primitives come
//!   from `crate::rounding`, not from this trait, since rounding mode is a
//!   process-wide, not a per-value, concern.
//! - Only `f32` and `f64` are implemented. A portable 80-bit extended type
//!   has no stable representation in Rust, so a third impl is left for a
//!   future host rather than speculatively written now.

use num_traits::Float;

/// Capability bound for the scalar type used by intervals, predicates, and
/// the exact-arithmetic bridge.
pub trait Real: Float + nalgebra::RealField + Copy + std::fmt::Debug {}

impl Real for f32 {}
impl Real for f64 {}

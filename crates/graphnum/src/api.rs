//! Curated flat API.
//!
//! One import path for the three algorithms and the vertex-type shim. The
//! signatures mirror the library-level contracts; config variants live in the
//! owning modules.

pub use crate::error::{Error, Result};
pub use crate::geom2::{convex_hull, convex_hull_xy, Hull};
pub use crate::sample::{sample_sequence, sample_sequence_with_rng, SampleSeed};
pub use crate::vertex_types::{resolve_vertex_types, TypeValue, VertexAttributes};
pub use crate::window::running_mean;

/// Sign of the turn `a -> b -> c`: twice the signed triangle area.
/// Positive for a counter-clockwise turn, zero when collinear.
#[inline]
pub fn turn(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    crate::geom2::cross(
        nalgebra::Vector2::new(a.0, a.1),
        nalgebra::Vector2::new(b.0, b.1),
        nalgebra::Vector2::new(c.0, c.1),
    )
}

//! Planar convex hulls.
//!
//! Purpose
//! - Compute the boundary polygon of a finite 2D point set and report it both as
//!   input indices and as coordinates.
//! - Keep the numerics explicit: exact comparisons by default, optional epsilons
//!   through `HullCfg`.
//!
//! Algorithm
//! - Andrew's monotone chain over points sorted by (x, y); strict turn test, so
//!   collinear boundary points are dropped. O(n log n), dominated by the sort.
//!
//! Code cross-refs: `Hull`, `HullCfg`, `convex_hull_cfg`

mod hull;
mod types;

pub use hull::{convex_hull, convex_hull_cfg, convex_hull_xy};
pub use types::{Hull, HullCfg};

use nalgebra::Vector2;

/// Twice the signed area of triangle `(a, b, c)`; positive for a CCW turn.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

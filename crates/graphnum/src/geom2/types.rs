//! Hull configuration and result types.
//!
//! - `HullCfg`: tolerances for duplicate detection and the turn test.
//! - `Hull`: boundary vertices as input indices plus coordinates, CCW.

use nalgebra::Vector2;

use super::cross;

/// Hull tolerances.
///
/// Both default to `0.0`: duplicates are exact coordinate matches and a turn is
/// kept only when its cross product is strictly positive.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Points within this (Euclidean) distance of an earlier kept point, in
    /// (x, y) order, are dropped as duplicates. With `0.0` only exact matches
    /// merge and the first input index survives; with a positive value the
    /// lexicographically smallest point of a near-duplicate cluster survives,
    /// and no two hull vertices lie within `dup_eps` of each other.
    pub dup_eps: f64,
    /// A turn with `cross <= turn_eps` is treated as non-convex and popped.
    pub turn_eps: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            dup_eps: 0.0,
            turn_eps: 0.0,
        }
    }
}

/// Convex hull of a point set.
///
/// `indices[k]` is the position in the input slice of the vertex whose
/// coordinates are `coords[k]`. Order is counter-clockwise from the lowest-x,
/// then lowest-y, vertex. Inputs of at most two points keep their input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    pub indices: Vec<usize>,
    pub coords: Vec<Vector2<f64>>,
}

impl Hull {
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn into_parts(self) -> (Vec<usize>, Vec<Vector2<f64>>) {
        (self.indices, self.coords)
    }

    /// Signed shoelace area; positive for CCW polygons, zero below three vertices.
    pub fn area(&self) -> f64 {
        let n = self.coords.len();
        if n < 3 {
            return 0.0;
        }
        let mut a = 0.0;
        for i in 0..n {
            let p = self.coords[i];
            let q = self.coords[(i + 1) % n];
            a += p.x * q.y - q.x * p.y;
        }
        0.5 * a
    }

    /// Is `p` inside or on the hull, up to `eps` slack?
    ///
    /// For a point hull this is a distance check; for a segment hull `p` must lie
    /// on the segment.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        match self.coords.len() {
            0 => false,
            1 => (p - self.coords[0]).norm() <= eps,
            2 => {
                let (a, b) = (self.coords[0], self.coords[1]);
                let ab = b - a;
                let len = ab.norm();
                if cross(a, b, p).abs() > eps * len.max(1.0) {
                    return false;
                }
                let t = (p - a).dot(&ab);
                t >= -eps * len && t <= ab.norm_squared() + eps * len
            }
            n => (0..n).all(|i| {
                let a = self.coords[i];
                let b = self.coords[(i + 1) % n];
                cross(a, b, p) >= -eps * (b - a).norm().max(1.0)
            }),
        }
    }
}

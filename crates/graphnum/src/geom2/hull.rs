use std::cmp::Ordering;

use nalgebra::Vector2;

use super::{cross, Hull, HullCfg};

/// Convex hull with default (exact) tolerances.
pub fn convex_hull(points: &[Vector2<f64>]) -> Hull {
    convex_hull_cfg(points, HullCfg::default())
}

/// Convex hull over `(x, y)` tuples.
pub fn convex_hull_xy(points: &[(f64, f64)]) -> Hull {
    let pts: Vec<Vector2<f64>> = points.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
    convex_hull(&pts)
}

#[inline]
fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Greedy near-duplicate merge over lexicographically sorted indices.
///
/// A point joins the first kept anchor within `eps`; otherwise it becomes an
/// anchor. Anchors are pairwise more than `eps` apart. Candidates are limited to
/// anchors whose x lies within `eps`, so the cost is O(n·b) for `b` anchors per
/// x-band of width `eps`.
fn merge_near(points: &[Vector2<f64>], order: Vec<usize>, eps: f64) -> Vec<usize> {
    let mut anchors: Vec<usize> = Vec::with_capacity(order.len());
    for i in order {
        let p = points[i];
        let merged = anchors
            .iter()
            .rev()
            .take_while(|&&a| points[a].x >= p.x - eps)
            .any(|&a| (points[a] - p).norm() <= eps);
        if !merged {
            anchors.push(i);
        }
    }
    anchors
}

/// Andrew's monotone chain convex hull over input indices.
pub fn convex_hull_cfg(points: &[Vector2<f64>], cfg: HullCfg) -> Hull {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| lex_cmp(&points[i], &points[j]));
    let mut order = if cfg.dup_eps > 0.0 {
        merge_near(points, order, cfg.dup_eps)
    } else {
        // Stable sort: exact duplicates are adjacent, first input index leads.
        order.dedup_by(|cur, prev| points[*cur] == points[*prev]);
        order
    };

    if points.len() <= 2 {
        // Tiny inputs keep their given order.
        order.sort_unstable();
        return collect(points, order);
    }
    if order.len() <= 2 {
        tracing::debug!(
            points = points.len(),
            distinct = order.len(),
            "degenerate hull input"
        );
        return collect(points, order);
    }

    let turn = |chain: &[usize], k: usize| {
        let n = chain.len();
        cross(points[chain[n - 2]], points[chain[n - 1]], points[k])
    };

    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &k in &order {
        while lower.len() >= 2 && turn(&lower, k) <= cfg.turn_eps {
            lower.pop();
        }
        lower.push(k);
    }
    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &k in order.iter().rev() {
        while upper.len() >= 2 && turn(&upper, k) <= cfg.turn_eps {
            upper.pop();
        }
        upper.push(k);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() == 2 {
        tracing::debug!(points = points.len(), "collinear hull input");
    }
    collect(points, hull)
}

fn collect(points: &[Vector2<f64>], indices: Vec<usize>) -> Hull {
    let coords = indices.iter().map(|&i| points[i]).collect();
    Hull { indices, coords }
}

//! Method D and Method A skip generators.
//!
//! Both walk a cursor forward through the candidates `cursor + 1 ..= high` and
//! push each selected integer. State is kept in `f64` as in the paper; every
//! skip is clamped against the exact `i128` capacity so rounding on huge pools
//! cannot push the cursor past `high` or starve later picks.

use rand::Rng;

/// Remaining candidates: `cursor + 1 ..= high`.
#[derive(Clone, Copy, Debug)]
pub(super) struct Span {
    pub cursor: i128,
    pub high: i128,
}

impl Span {
    fn pool(&self) -> f64 {
        (self.high - self.cursor) as f64
    }

    /// Skip `s` candidates, select the next one, keep room for `left` more picks.
    fn take(&mut self, s: f64, left: u64, out: &mut Vec<i64>) {
        let max_skip = self.high - self.cursor - 1 - left as i128;
        let s = (s.max(0.0) as i128).min(max_skip);
        self.cursor += s + 1;
        out.push(self.cursor as i64);
    }
}

/// `U^(1/k)` for uniform `U`; the distribution of the largest of `k` uniforms.
#[inline]
fn root_uniform<R: Rng + ?Sized>(rng: &mut R, inv: f64) -> f64 {
    (rng.gen::<f64>().ln() * inv).exp()
}

/// Vitter's Method D. Requires `1 <= count < pool` and `alpha_inv >= MIN_ALPHA_INV`.
pub(super) fn method_d<R: Rng + ?Sized>(
    rng: &mut R,
    mut span: Span,
    count: u64,
    alpha_inv: f64,
    out: &mut Vec<i64>,
) {
    let mut left = count;
    let mut big_n = span.pool();
    let mut n = count as f64;
    let mut ninv = 1.0 / n;
    let mut qu1 = big_n - n + 1.0;
    let mut threshold = alpha_inv * n;
    let mut v_prime = root_uniform(rng, ninv);

    while n > 1.0 && threshold < big_n {
        let nmin1inv = 1.0 / (n - 1.0);
        let s = loop {
            // Candidate from the continuous envelope, rejected outright if past the pool.
            let (x, s) = loop {
                let x = big_n * (1.0 - v_prime);
                let s = x.floor();
                if s < qu1 {
                    break (x, s);
                }
                v_prime = root_uniform(rng, ninv);
            };
            let u: f64 = rng.gen();
            let y1 = ((u * big_n / qu1).ln() * nmin1inv).exp();
            v_prime = y1 * (1.0 - x / big_n) * (qu1 / (qu1 - s));
            if v_prime <= 1.0 {
                // Squeeze accept; v_prime is reused as the next U^(1/(n-1)).
                break s;
            }

            // Exact acceptance test.
            let mut y2 = 1.0;
            let mut top = big_n - 1.0;
            let (mut bottom, limit) = if n - 1.0 > s {
                (big_n - n, big_n - s)
            } else {
                (big_n - 1.0 - s, qu1)
            };
            let mut t = big_n - 1.0;
            while t >= limit {
                y2 = (y2 * top) / bottom;
                top -= 1.0;
                bottom -= 1.0;
                t -= 1.0;
            }
            if big_n / (big_n - x) >= y1 * (y2.ln() * nmin1inv).exp() {
                v_prime = root_uniform(rng, nmin1inv);
                break s;
            }
            v_prime = root_uniform(rng, ninv);
        };

        left -= 1;
        span.take(s, left, out);
        big_n -= s + 1.0;
        n -= 1.0;
        ninv = nmin1inv;
        qu1 -= s;
        threshold -= alpha_inv;
    }

    if n > 1.0 {
        tracing::debug!(remaining = left, pool = big_n, "sampler switching to method A");
        method_a(rng, span, left, out);
    } else {
        // One pick left: v_prime is U^(1/1), a plain uniform.
        span.take((span.pool() * v_prime).floor(), 0, out);
    }
}

/// Vitter's Method A. Requires `1 <= count <= pool`.
pub(super) fn method_a<R: Rng + ?Sized>(
    rng: &mut R,
    mut span: Span,
    count: u64,
    out: &mut Vec<i64>,
) {
    let mut left = count;
    let mut big_n = span.pool();
    let mut top = big_n - count as f64;

    while left >= 2 {
        let v: f64 = rng.gen();
        let mut s = 0.0;
        let mut quot = top / big_n;
        while quot > v {
            s += 1.0;
            top -= 1.0;
            big_n -= 1.0;
            quot = (quot * top) / big_n;
        }
        left -= 1;
        span.take(s, left, out);
        big_n -= 1.0;
    }

    let s = (span.pool() * rng.gen::<f64>()).floor();
    span.take(s, 0, out);
}

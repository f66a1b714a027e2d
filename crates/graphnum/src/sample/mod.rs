//! Sequential random sampling of integer intervals.
//!
//! Purpose
//! - Draw `count` distinct integers from `[low, high]`, uniformly over all
//!   `count`-subsets, returned in increasing order.
//! - Run in expected time proportional to `count`, never to the width of the
//!   interval: the candidates are skipped over, not materialized.
//!
//! Model
//! - Vitter's Method D generates the skip between consecutive picks from a
//!   closed-form envelope with an acceptance test. Once the remaining sample is
//!   a large fraction of the remaining pool (`alpha_inv * count >= pool`,
//!   with `alpha_inv` never below `MIN_ALPHA_INV`), Method A finishes with a
//!   cheap linear scan over the skip distribution.
//! - The RNG is always supplied by the caller; `sample_sequence` uses the
//!   thread-local generator, `SampleSeed` replays a draw.
//!
//! References
//! - J. S. Vitter, "An efficient algorithm for sequential random sampling",
//!   ACM TOMS 13(1), 1987.
//! - Code cross-refs: `vitter::method_d`, `vitter::method_a`

mod vitter;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// Floor for `SampleCfg::alpha_inv`.
///
/// Method D degrades once the remaining count approaches the remaining pool;
/// Method A always takes over before the count reaches half the pool.
pub const MIN_ALPHA_INV: f64 = 2.0;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Method D runs while `alpha_inv * remaining_count < remaining_pool`.
    /// Vitter recommends 13. Values below `MIN_ALPHA_INV` are raised to it,
    /// so `0.0` keeps Method D running for as long as it stays efficient.
    pub alpha_inv: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self { alpha_inv: 13.0 }
    }
}

/// Replay token: the same `(seed, index)` reproduces the same draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleSeed {
    pub seed: u64,
    pub index: u64,
}

impl SampleSeed {
    pub fn rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Sample with the thread-local RNG.
pub fn sample_sequence(low: i64, high: i64, count: u64) -> Result<Vec<i64>> {
    sample_sequence_with_rng(&mut rand::thread_rng(), low, high, count)
}

/// Sample with a caller-supplied RNG and the default config.
pub fn sample_sequence_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    low: i64,
    high: i64,
    count: u64,
) -> Result<Vec<i64>> {
    sample_sequence_cfg(rng, low, high, count, SampleCfg::default())
}

/// Draw a strictly increasing sequence of `count` distinct integers from `[low, high]`.
///
/// Errors
/// - `InvalidInput` if `low > high` or `cfg.alpha_inv` is negative or not finite.
/// - `SampleTooLarge` if `count > high - low + 1`.
///
/// Pools wider than 2^53 are tracked in `f64` inside the skip generator; the
/// output still never leaves `[low, high]`.
pub fn sample_sequence_cfg<R: Rng + ?Sized>(
    rng: &mut R,
    low: i64,
    high: i64,
    count: u64,
    cfg: SampleCfg,
) -> Result<Vec<i64>> {
    if low > high {
        return Err(Error::invalid(format!(
            "lower limit {low} is greater than upper limit {high}"
        )));
    }
    if !(cfg.alpha_inv.is_finite() && cfg.alpha_inv >= 0.0) {
        return Err(Error::invalid(format!(
            "alpha_inv must be finite and >= 0, got {}",
            cfg.alpha_inv
        )));
    }
    let pool = (high as i128 - low as i128 + 1) as u128;
    if count as u128 > pool {
        return Err(Error::SampleTooLarge { count, pool });
    }

    if count == 0 {
        return Ok(Vec::new());
    }
    if count as u128 == pool {
        return Ok((low..=high).collect());
    }

    let mut out = Vec::with_capacity(count as usize);
    vitter::method_d(
        rng,
        vitter::Span {
            cursor: low as i128 - 1,
            high: high as i128,
        },
        count,
        cfg.alpha_inv.max(MIN_ALPHA_INV),
        &mut out,
    );
    debug_assert_eq!(out.len() as u64, count);
    Ok(out)
}

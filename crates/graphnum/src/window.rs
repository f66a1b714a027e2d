//! Sliding-window (running) mean.
//!
//! `running_mean(v, w)[i] = mean(v[i..i + w])` for every full window.
//!
//! Two summation strategies, selected via `WindowCfg`:
//! - `MeanMethod::Running` (default): O(n). The window sum is updated by
//!   subtracting the leaving element and adding the entering one, with
//!   Neumaier compensation so drift stays bounded on long inputs. The first
//!   window is summed left to right, so index 0 matches a direct mean exactly.
//!   A window touching NaN or an infinity is re-summed directly, so non-finite
//!   values only affect the windows that contain them.
//! - `MeanMethod::Recompute`: O(n·w). Each window is summed on its own, so a
//!   window's result depends only on its own elements.
//!
//! The two agree to within a few ulps of the window sum; they are not bitwise
//! identical in general.

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeanMethod {
    #[default]
    Running,
    Recompute,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowCfg {
    pub method: MeanMethod,
}

/// Running mean with the default (compensated running-sum) method.
pub fn running_mean(values: &[f64], width: usize) -> Result<Vec<f64>> {
    running_mean_cfg(values, width, WindowCfg::default())
}

/// Running mean over windows of `width` consecutive values.
///
/// Errors: `InvalidInput` if `width == 0` or `width > values.len()`.
pub fn running_mean_cfg(values: &[f64], width: usize, cfg: WindowCfg) -> Result<Vec<f64>> {
    if width == 0 {
        return Err(Error::invalid("window width must be positive"));
    }
    if width > values.len() {
        return Err(Error::invalid(format!(
            "vector too short for this window width ({} < {width})",
            values.len()
        )));
    }
    let out = match cfg.method {
        MeanMethod::Running => running(values, width),
        MeanMethod::Recompute => values
            .windows(width)
            .map(|win| win.iter().sum::<f64>() / width as f64)
            .collect(),
    };
    Ok(out)
}

fn running(values: &[f64], width: usize) -> Vec<f64> {
    let w = width as f64;
    let mut out = Vec::with_capacity(values.len() - width + 1);
    // Plain left-to-right sum for the first window; compensation starts after it.
    let mut acc = NeumaierSum::of(&values[..width]);
    out.push(acc.value() / w);
    for i in width..values.len() {
        let leaving = values[i - width];
        let entering = values[i];
        if leaving.is_finite() && entering.is_finite() && acc.value().is_finite() {
            acc.add(-leaving);
            acc.add(entering);
        } else {
            // NaN and infinities do not cancel; resync so they stay local to their windows.
            acc = NeumaierSum::of(&values[i + 1 - width..=i]);
        }
        out.push(acc.value() / w);
    }
    out
}

/// Compensated sum (Kahan–Babuška/Neumaier variant).
#[derive(Clone, Copy, Debug)]
struct NeumaierSum {
    sum: f64,
    comp: f64,
}

impl NeumaierSum {
    fn of(window: &[f64]) -> Self {
        Self {
            sum: window.iter().sum::<f64>(),
            comp: 0.0,
        }
    }

    #[inline]
    fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.comp += (self.sum - t) + x;
        } else {
            self.comp += (x - t) + self.sum;
        }
        self.sum = t;
    }

    #[inline]
    fn value(&self) -> f64 {
        self.sum + self.comp
    }
}

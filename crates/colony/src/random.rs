//! Source of every random decision a simulation makes.
//!
//! All draws go through [`RandomSource`] so runs can be replayed with a
//! seeded generator or scripted outright in tests. Any [`rand::Rng`]
//! (`ChaCha8Rng`, `StdRng`, `thread_rng()`) is a source as-is.

use rand::Rng;

pub trait RandomSource {
    /// One independent Bernoulli trial. Probabilities are clamped into
    /// `[0, 1]`; `NaN` never fires.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform draw from `low..=high`. Bounds may arrive in either order.
    fn draw_inclusive(&mut self, low: u64, high: u64) -> u64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            false
        } else if probability >= 1.0 {
            true
        } else {
            self.gen_bool(probability)
        }
    }

    fn draw_inclusive(&mut self, low: u64, high: u64) -> u64 {
        let (low, high) = (low.min(high), low.max(high));
        self.gen_range(low..=high)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Deterministic source for tests: every trial returns `verdict` (except
/// that probability 0 never fires and 1 always does), draws return the
/// lower bound, and picks return 0 so growth fills cells in row-major order.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScriptedSource {
    pub verdict: bool,
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            false
        } else {
            probability >= 1.0 || self.verdict
        }
    }

    fn draw_inclusive(&mut self, low: u64, high: u64) -> u64 {
        low.min(high)
    }

    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

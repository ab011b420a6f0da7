//! Per-run behavior of the colony.

use std::fmt;

/// Daily baseline growth range and per-cell event probabilities.
///
/// `from_number` and `to_number` are both inclusive bounds of the daily
/// growth draw; either order is accepted. Probabilities are read as-is and
/// clamped into `[0, 1]` when evaluated.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BehaviorConfig {
    pub from_number: u32,
    pub to_number: u32,
    pub probability_to_die: f64,
    pub probability_to_reproduce: f64,
}

impl fmt::Display for BehaviorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grow {}..={} die {} reproduce {}",
            self.from_number, self.to_number, self.probability_to_die, self.probability_to_reproduce
        )
    }
}

impl BehaviorConfig {
    #[must_use]
    pub const fn new(
        from_number: u32,
        to_number: u32,
        probability_to_die: f64,
        probability_to_reproduce: f64,
    ) -> Self {
        Self {
            from_number,
            to_number,
            probability_to_die,
            probability_to_reproduce,
        }
    }

    /// Inclusive `(low, high)` bounds of the daily growth draw.
    #[must_use]
    pub fn growth_bounds(&self) -> (u64, u64) {
        let from = u64::from(self.from_number);
        let to = u64::from(self.to_number);
        (from.min(to), from.max(to))
    }

    /// A config that never introduces new organisms.
    #[must_use]
    pub fn is_barren(&self) -> bool {
        self.from_number == 0 && self.to_number == 0
    }
}

//! Outcome of a simulation run.

use std::fmt;

use wasm_bindgen::prelude::*;

/// Days until the dish filled (or [`Response::NEVER_FULL`]) and the number
/// of organisms that died along the way.
#[wasm_bindgen]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Response {
    #[wasm_bindgen(readonly)]
    pub days: i64,
    #[wasm_bindgen(readonly)]
    pub dead_bacteria: u64,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_never_full() {
            write!(f, "never full, {} dead", self.dead_bacteria)
        } else {
            write!(f, "full after {} days, {} dead", self.days, self.dead_bacteria)
        }
    }
}

impl Response {
    /// Sentinel for a run that can provably not reach full occupancy.
    pub const NEVER_FULL: i64 = -1;

    #[must_use]
    pub const fn new(days: i64, dead_bacteria: u64) -> Self {
        Self { days, dead_bacteria }
    }

    #[must_use]
    pub const fn filled(days: u64, dead_bacteria: u64) -> Self {
        Self::new(days as i64, dead_bacteria)
    }

    #[must_use]
    pub const fn never_full(dead_bacteria: u64) -> Self {
        Self::new(Self::NEVER_FULL, dead_bacteria)
    }

    #[must_use]
    pub const fn is_never_full(&self) -> bool {
        self.days == Self::NEVER_FULL
    }

    /// `None` for a stalled run.
    #[must_use]
    pub fn days_to_fill(&self) -> Option<u64> {
        u64::try_from(self.days).ok()
    }
}

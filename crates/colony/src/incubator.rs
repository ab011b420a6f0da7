//! One simulated day over a borrowed grid.

use crate::config::BehaviorConfig;
use crate::grid::Grid;
use crate::phases::{self, Phase};
use crate::random::RandomSource;

/// What a single day did to the colony.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DayReport {
    pub deaths: usize,
    pub spread: usize,
    pub colonized: usize,
}

impl DayReport {
    #[must_use]
    pub fn births(&self) -> usize {
        self.spread + self.colonized
    }

    /// True when the day did not raise occupancy.
    #[must_use]
    pub fn stalled(&self) -> bool {
        self.births() <= self.deaths
    }

    fn record(&mut self, phase: Phase, count: usize) {
        match phase {
            Phase::Death => self.deaths += count,
            Phase::Spread => self.spread += count,
            Phase::Growth => self.colonized += count,
        }
    }
}

/// Everything a phase may touch during one day. `seeds` holds the indices
/// occupied at the start of the day; the death phase prunes it down to the
/// survivors that are allowed to spread.
#[derive(Debug)]
pub struct Incubator<'a, S: RandomSource + ?Sized> {
    pub grid: &'a mut Grid,
    pub config: &'a BehaviorConfig,
    pub source: &'a mut S,
    pub(crate) seeds: Vec<usize>,
}

impl<'a, S: RandomSource + ?Sized> Incubator<'a, S> {
    pub fn new(grid: &'a mut Grid, config: &'a BehaviorConfig, source: &'a mut S) -> Self {
        let seeds = grid.occupied_indices();
        Self {
            grid,
            config,
            source,
            seeds,
        }
    }

    /// Runs death, spread and growth in order.
    pub fn run_day(mut self) -> DayReport {
        let mut report = DayReport::default();
        for phase in Phase::DAILY_ORDER {
            let count = phases::apply_phase(phase, &mut self);
            report.record(phase, count);
        }
        report
    }

    /// Split borrow for phases that mutate the grid while walking `seeds`.
    pub(crate) fn parts(&mut self) -> (&mut Grid, &mut S, &mut Vec<usize>) {
        (&mut *self.grid, &mut *self.source, &mut self.seeds)
    }
}

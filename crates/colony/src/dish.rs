//! The dish: a bounded grid and the day loop that fills it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::address::Address;
use crate::bacteria::Bacteria;
use crate::config::BehaviorConfig;
use crate::error::{ColonyError, Result};
use crate::grid::Grid;
use crate::incubator::Incubator;
use crate::random::RandomSource;
use crate::response::Response;
use crate::MAX_SIZE;

/// A square dish of `size × size` cells with its own random generator.
#[derive(Debug, Clone)]
pub struct Dish {
    grid: Grid,
    rng: ChaCha8Rng,
}

impl Default for Dish {
    /// The empty dish: no cells at all.
    fn default() -> Self {
        Self::from_parts(Grid::new(0), ChaCha8Rng::from_entropy())
    }
}

impl Dish {
    /// Creates an empty dish seeded from OS entropy.
    ///
    /// # Errors
    /// [`ColonyError::InvalidSize`] if `size` is negative or above [`MAX_SIZE`].
    pub fn new(size: i32) -> Result<Self> {
        Self::with_rng(size, ChaCha8Rng::from_entropy())
    }

    /// Creates an empty dish whose runs are reproducible for a given `seed`.
    ///
    /// # Errors
    /// [`ColonyError::InvalidSize`] if `size` is negative or above [`MAX_SIZE`].
    pub fn with_seed(size: i32, seed: u64) -> Result<Self> {
        Self::with_rng(size, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(size: i32, rng: ChaCha8Rng) -> Result<Self> {
        if !(0..=MAX_SIZE).contains(&size) {
            return Err(ColonyError::InvalidSize {
                size,
                max: MAX_SIZE,
            });
        }
        Ok(Self::from_parts(Grid::new(size), rng))
    }

    fn from_parts(grid: Grid, rng: ChaCha8Rng) -> Self {
        Self { grid, rng }
    }

    #[must_use]
    pub fn size(&self) -> i32 {
        self.grid.size()
    }

    /// Read view over every cell.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// An address inside this dish, or `None` when out of range.
    #[must_use]
    pub fn address(&self, row: i32, col: i32) -> Option<Address> {
        let address = Address::new(row, col);
        self.grid.contains(address).then_some(address)
    }

    /// The occupant at `(row, col)`. Out-of-range coordinates read as empty.
    #[must_use]
    pub fn occupant_at(&self, row: i32, col: i32) -> Option<Bacteria> {
        self.grid.get(row, col)
    }

    /// Seeds a cell, replacing any previous occupant. Out-of-range
    /// addresses are ignored.
    pub fn place(&mut self, address: Address, bacteria: Bacteria) {
        self.grid.set(address.row, address.col, Some(bacteria));
    }

    /// Runs days on this dish until it is full or stalls, drawing from the
    /// dish's own generator. The grid keeps its final state.
    pub fn simulate(&mut self, config: &BehaviorConfig) -> Response {
        let Self { grid, rng } = self;
        incubate(grid, config, rng)
    }

    /// Like [`Dish::simulate`], with every random decision taken from `source`.
    pub fn simulate_with<S: RandomSource + ?Sized>(
        &mut self,
        config: &BehaviorConfig,
        source: &mut S,
    ) -> Response {
        incubate(&mut self.grid, config, source)
    }
}

/// The day loop. Every day that does not stall raises occupancy by at least
/// one, so the loop ends within `cell_count` days.
fn incubate<S: RandomSource + ?Sized>(
    grid: &mut Grid,
    config: &BehaviorConfig,
    source: &mut S,
) -> Response {
    if config.is_barren() {
        debug!(%config, "no growth configured, dish can never fill");
        return Response::never_full(0);
    }
    if grid.is_full() {
        debug!(cells = grid.cell_count(), "dish already full");
        return Response::filled(0, 0);
    }

    let mut days: u64 = 0;
    let mut dead: u64 = 0;
    let mut occupied = grid.occupied_count();
    loop {
        let report = Incubator::new(grid, config, source).run_day();
        days += 1;
        dead += report.deaths as u64;
        occupied = occupied + report.births() - report.deaths;
        trace!(
            day = days,
            deaths = report.deaths,
            spread = report.spread,
            colonized = report.colonized,
            occupied,
            "day complete"
        );

        if occupied == grid.cell_count() {
            debug!(days, dead, "dish full");
            return Response::filled(days, dead);
        }
        if report.stalled() {
            debug!(day = days, occupied, dead, "colony stalled");
            return Response::never_full(dead);
        }
    }
}

//! Per-phase update functions dispatched from the day loop.

mod death;
mod growth;
mod spread;

use std::fmt;

use crate::incubator::Incubator;
use crate::random::RandomSource;

/// Discriminants follow the daily order; do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Phase {
    Death = 0,
    Spread = 1,
    Growth = 2,
}

impl Phase {
    pub const DAILY_ORDER: [Phase; 3] = [Phase::Death, Phase::Spread, Phase::Growth];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Death => write!(f, "Death"),
            Self::Spread => write!(f, "Spread"),
            Self::Growth => write!(f, "Growth"),
        }
    }
}

/// Apply one phase and return how many cells it changed.
pub fn apply_phase<S: RandomSource + ?Sized>(
    phase: Phase,
    incubator: &mut Incubator<'_, S>,
) -> usize {
    match phase {
        Phase::Death => death::die_off(incubator),
        Phase::Spread => spread::spread(incubator),
        Phase::Growth => growth::colonize(incubator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bacteria::Bacteria;
    use crate::config::BehaviorConfig;
    use crate::grid::Grid;
    use crate::random::ScriptedSource;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn seeded_grid(size: i32, occupied: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(row, col) in occupied {
            grid.set(row, col, Some(Bacteria::new()));
        }
        grid
    }

    #[test]
    fn daily_order_matches_discriminants() {
        for (position, phase) in Phase::DAILY_ORDER.iter().enumerate() {
            assert_eq!(*phase as usize, position);
        }
    }

    #[test]
    fn phase_display() {
        assert_eq!(format!("{}", Phase::Death), "Death");
        assert_eq!(format!("{}", Phase::Growth), "Growth");
    }

    #[test]
    fn certain_death_clears_every_seed() {
        let mut grid = seeded_grid(3, &[(0, 0), (1, 1), (2, 2)]);
        let config = BehaviorConfig::new(0, 0, 1.0, 0.0);
        let mut source = ScriptedSource { verdict: false };
        let mut incubator = Incubator::new(&mut grid, &config, &mut source);
        assert_eq!(apply_phase(Phase::Death, &mut incubator), 3);
        assert!(incubator.seeds.is_empty());
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn no_death_keeps_seeds() {
        let mut grid = seeded_grid(3, &[(0, 0), (2, 2)]);
        let config = BehaviorConfig::new(0, 0, 0.0, 0.0);
        let mut source = ScriptedSource { verdict: true };
        let mut incubator = Incubator::new(&mut grid, &config, &mut source);
        assert_eq!(apply_phase(Phase::Death, &mut incubator), 0);
        assert_eq!(incubator.seeds, vec![0, 8]);
    }

    #[test]
    fn spread_fills_around_every_seed() {
        let mut grid = seeded_grid(3, &[(0, 0), (2, 2)]);
        let before = grid.clone();
        let config = BehaviorConfig::new(0, 0, 0.0, 1.0);
        let mut source = ScriptedSource { verdict: false };
        let mut incubator = Incubator::new(&mut grid, &config, &mut source);
        // (1,1) is shared: the first seed fills it, the second leaves it be.
        assert_eq!(apply_phase(Phase::Spread, &mut incubator), 5);
        assert_eq!(grid.occupied_count(), 7);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 0), before.get(0, 0));
        assert_eq!(grid.get(2, 2), before.get(2, 2));
    }

    #[test]
    fn spread_never_fires_at_zero_probability() {
        let mut grid = seeded_grid(3, &[(1, 1)]);
        let config = BehaviorConfig::new(0, 0, 0.0, 0.0);
        let mut source = ScriptedSource { verdict: true };
        let mut incubator = Incubator::new(&mut grid, &config, &mut source);
        assert_eq!(apply_phase(Phase::Spread, &mut incubator), 0);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn growth_is_capped_at_capacity() {
        let mut grid = seeded_grid(3, &[(1, 1)]);
        let seed = grid.get(1, 1);
        let config = BehaviorConfig::new(u32::MAX, u32::MAX, 0.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut incubator = Incubator::new(&mut grid, &config, &mut rng);
        assert_eq!(apply_phase(Phase::Growth, &mut incubator), 8);
        assert!(grid.is_full());
        assert_eq!(grid.get(1, 1), seed);
    }

    #[test]
    fn growth_on_full_grid_is_zero() {
        let mut grid = seeded_grid(1, &[(0, 0)]);
        let config = BehaviorConfig::new(5, 5, 0.0, 0.0);
        let mut source = ScriptedSource { verdict: true };
        let mut incubator = Incubator::new(&mut grid, &config, &mut source);
        assert_eq!(apply_phase(Phase::Growth, &mut incubator), 0);
    }

    #[test]
    fn growth_swapped_bounds_draw_within_range() {
        let mut grid = Grid::new(10);
        let config = BehaviorConfig::new(7, 3, 0.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut incubator = Incubator::new(&mut grid, &config, &mut rng);
        let grown = apply_phase(Phase::Growth, &mut incubator);
        assert!((3..=7).contains(&grown));
    }

    proptest! {
        #[test]
        fn prop_growth_occupies_exactly_min_of_draw_and_empty(
            seed in any::<u64>(),
            size in 1i32..=10,
            occupied in proptest::collection::vec(any::<bool>(), 100),
            rate in 0u32..150,
        ) {
            let mut grid = Grid::new(size);
            for (index, address) in grid.addresses().collect::<Vec<_>>().into_iter().enumerate() {
                if occupied[index] {
                    grid.set(address.row, address.col, Some(Bacteria::new()));
                }
            }
            let before = grid.clone();
            let old: HashSet<Bacteria> = before.cells.iter().flatten().copied().collect();
            let empty_before = before.cell_count() - before.occupied_count();
                let config = BehaviorConfig::new(rate, rate, 0.0, 0.0);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut incubator = Incubator::new(&mut grid, &config, &mut rng);
            let grown = apply_phase(Phase::Growth, &mut incubator);

            prop_assert_eq!(grown, (rate as usize).min(empty_before));
            let mut fresh = HashSet::new();
            for (address, cell) in grid.iter() {
                match before.get(address.row, address.col) {
                    Some(old) => prop_assert_eq!(cell, Some(old)),
                    None => {
                        if let Some(new) = cell {
                            prop_assert!(!old.contains(&new));
                            prop_assert!(fresh.insert(new));
                        }
                    }
                }
            }
            prop_assert_eq!(fresh.len(), grown);
        }
    }
}

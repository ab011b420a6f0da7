//! Death phase: each start-of-day occupant dies independently.

use crate::incubator::Incubator;
use crate::random::RandomSource;

/// Removes dead occupants and drops them from the day's seeds, so only
/// survivors reach the spread phase.
pub fn die_off<S: RandomSource + ?Sized>(incubator: &mut Incubator<'_, S>) -> usize {
    let probability = incubator.config.probability_to_die;
    let (grid, source, seeds) = incubator.parts();
    let before = seeds.len();
    seeds.retain(|&index| {
        if source.chance(probability) {
            grid.cells[index] = None;
            false
        } else {
            true
        }
    });
    before - seeds.len()
}

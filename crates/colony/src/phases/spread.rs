//! Spread phase: a surviving occupant may colonize all of its empty neighbors.

use crate::bacteria::Bacteria;
use crate::incubator::Incubator;
use crate::random::RandomSource;

pub fn spread<S: RandomSource + ?Sized>(incubator: &mut Incubator<'_, S>) -> usize {
    let probability = incubator.config.probability_to_reproduce;
    let (grid, source, seeds) = incubator.parts();
    let mut filled = 0;
    for &index in seeds.iter() {
        if !source.chance(probability) {
            continue;
        }
        let address = grid.address_of(index);
        filled += grid.fill_empty_neighbors(address, Bacteria::new);
    }
    filled
}

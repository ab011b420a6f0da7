//! Growth phase: baseline colonization of empty cells.
//!
//! The day's rate is one uniform draw from the configured range. That many
//! distinct empty cells, chosen uniformly by a partial Fisher-Yates pass,
//! receive a fresh occupant. Draws larger than the free space fill it.

use crate::bacteria::Bacteria;
use crate::incubator::Incubator;
use crate::random::RandomSource;

pub fn colonize<S: RandomSource + ?Sized>(incubator: &mut Incubator<'_, S>) -> usize {
    let (low, high) = incubator.config.growth_bounds();
    let (grid, source, _) = incubator.parts();
    let drawn = source.draw_inclusive(low, high);

    let mut empty = grid.empty_indices();
    let count = usize::try_from(drawn).map_or(empty.len(), |drawn| drawn.min(empty.len()));
    for slot in 0..count {
        let pick = slot + source.pick_index(empty.len() - slot);
        empty.swap(slot, pick);
        grid.cells[empty[slot]] = Some(Bacteria::new());
    }
    count
}

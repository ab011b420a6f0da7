//! Grid coordinates and their clipped Moore neighborhood.

use std::fmt;

/// Offsets of the eight surrounding cells, row-major from the top-left.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), // up-left
    (-1, 0),  // up
    (-1, 1),  // up-right
    (0, -1),  // left
    (0, 1),   // right
    (1, -1),  // down-left
    (1, 0),   // down
    (1, 1),   // down-right
];

/// A `(row, col)` position in a dish. Carries no state beyond the pair;
/// the owning dish's `size` supplies the bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Address {
    pub row: i32,
    pub col: i32,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Address {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn in_bounds(self, size: i32) -> bool {
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// In-bounds neighbors for a `size × size` grid. Never wraps: corners
    /// yield 3, edges 5, interior cells 8.
    pub fn neighbors(self, size: i32) -> impl Iterator<Item = Address> {
        MOORE_OFFSETS
            .iter()
            .map(move |&(dr, dc)| {
                Address::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
            })
            .filter(move |neighbor| neighbor.in_bounds(size))
    }
}

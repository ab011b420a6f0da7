//! Flat cell storage for a square dish.

use crate::address::Address;
use crate::bacteria::Bacteria;

/// `size × size` cells, row-major. Out-of-bounds reads are empty, writes
/// are no-ops. The set of addresses is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    pub(crate) cells: Vec<Option<Bacteria>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Grid {
    /// Callers validate `size`; negative sizes produce an empty grid.
    #[must_use]
    pub fn new(size: i32) -> Self {
        let side = size.max(0) as usize;
        Self {
            size: size.max(0),
            cells: vec![None; side * side],
        }
    }

    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn contains(&self, address: Address) -> bool {
        address.in_bounds(self.size)
    }

    #[must_use]
    pub fn index_of(&self, address: Address) -> Option<usize> {
        self.contains(address)
            .then(|| address.row as usize * self.size as usize + address.col as usize)
    }

    /// Inverse of [`Grid::index_of`]; `index` must be below `cell_count`.
    pub(crate) fn address_of(&self, index: usize) -> Address {
        debug_assert!(index < self.cells.len(), "index {index} outside the grid");
        let side = self.size as usize;
        Address::new((index / side) as i32, (index % side) as i32)
    }

    /// Every address in the grid, row-major.
    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        (0..self.cells.len()).map(|index| self.address_of(index))
    }

    /// Every cell with its address, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Address, Option<Bacteria>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.address_of(index), *cell))
    }

    #[must_use]
    pub fn get(&self, row: i32, col: i32) -> Option<Bacteria> {
        self.index_of(Address::new(row, col))
            .and_then(|index| self.cells[index])
    }

    pub fn set(&mut self, row: i32, col: i32, occupant: Option<Bacteria>) {
        if let Some(index) = self.index_of(Address::new(row, col)) {
            self.cells[index] = occupant;
        }
    }

    pub(crate) fn occupied_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.is_some().then_some(index))
            .collect()
    }

    pub(crate) fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.is_none().then_some(index))
            .collect()
    }

    /// Occupies every empty in-bounds neighbor of `address` with a fresh
    /// occupant from `hatch`. Occupied neighbors keep their occupant. A
    /// no-op when `address` lies outside the grid. Returns the fill count.
    pub fn fill_empty_neighbors(
        &mut self,
        address: Address,
        mut hatch: impl FnMut() -> Bacteria,
    ) -> usize {
        if !self.contains(address) {
            return 0;
        }
        let mut filled = 0;
        for neighbor in address.neighbors(self.size) {
            let index = neighbor.row as usize * self.size as usize + neighbor.col as usize;
            if self.cells[index].is_none() {
                self.cells[index] = Some(hatch());
                filled += 1;
            }
        }
        filled
    }
}

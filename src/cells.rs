// SPDX-License-Identifier: MPL-2.0
//! Cell grid generation for quilt blocks.
//!
//! Every block carries a decorative N×N grid of cells. The grid size is read
//! from the block's raw size attribute; absent or malformed attributes fall
//! back to [`DEFAULT_GRID_SIZE`].

/// Grid size applied when a block declares no usable size attribute.
pub const DEFAULT_GRID_SIZE: u32 = 4;

/// A single decorative cell inside a block grid.
///
/// Cells are identified by a 1-based sequential index, unique within their
/// grid. The index doubles as the seed for the cell's decorative styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// 1-based position within the grid, in row-major order.
    pub index: u32,
}

/// A generated N×N grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellGrid {
    size: u32,
    cells: Vec<Cell>,
}

/// Parses a raw size attribute, falling back to [`DEFAULT_GRID_SIZE`] when
/// the attribute is absent, non-numeric, or smaller than 1.
#[must_use]
pub fn grid_size_or_default(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&size| size >= 1)
        .unwrap_or(DEFAULT_GRID_SIZE)
}

impl CellGrid {
    /// Generates a fresh grid of exactly `size²` cells, identified `1..=size²`.
    #[must_use]
    pub fn generate(size: u32) -> Self {
        let total = size * size;
        let cells = (1..=total).map(|index| Cell { index }).collect();
        Self { size, cells }
    }

    /// Generates a grid from a raw size attribute (see [`grid_size_or_default`]).
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        Self::generate(grid_size_or_default(raw))
    }

    /// Discards existing cells and generates a fresh set from the stored size.
    ///
    /// Regeneration is idempotent: the resulting cell set is identical no
    /// matter how many times it runs.
    pub fn regenerate(&mut self) {
        *self = Self::generate(self.size);
    }

    /// The declared side length of the grid.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The generated cells, in identifier order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_size_squared_cells() {
        for size in 1..=8 {
            let grid = CellGrid::generate(size);
            assert_eq!(grid.len(), (size * size) as usize);
        }
    }

    #[test]
    fn cells_are_uniquely_identified_one_based() {
        let grid = CellGrid::generate(3);
        let indices: Vec<u32> = grid.cells().iter().map(|c| c.index).collect();
        assert_eq!(indices, (1..=9).collect::<Vec<u32>>());
    }

    #[test]
    fn missing_attribute_falls_back_to_default() {
        assert_eq!(grid_size_or_default(None), DEFAULT_GRID_SIZE);
        assert_eq!(CellGrid::from_attribute(None).len(), 16);
    }

    #[test]
    fn non_numeric_attribute_falls_back_to_default() {
        assert_eq!(grid_size_or_default(Some("wide")), DEFAULT_GRID_SIZE);
        assert_eq!(grid_size_or_default(Some("")), DEFAULT_GRID_SIZE);
        assert_eq!(grid_size_or_default(Some("4.5")), DEFAULT_GRID_SIZE);
    }

    #[test]
    fn zero_attribute_falls_back_to_default() {
        assert_eq!(grid_size_or_default(Some("0")), DEFAULT_GRID_SIZE);
    }

    #[test]
    fn numeric_attribute_is_honored() {
        assert_eq!(grid_size_or_default(Some("6")), 6);
        assert_eq!(grid_size_or_default(Some(" 2 ")), 2);
        assert_eq!(CellGrid::from_attribute(Some("5")).len(), 25);
    }

    #[test]
    fn regenerate_is_idempotent() {
        let mut grid = CellGrid::generate(4);
        let original = grid.clone();
        grid.regenerate();
        grid.regenerate();
        assert_eq!(grid, original);
    }
}

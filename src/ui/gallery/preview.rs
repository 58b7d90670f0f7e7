// SPDX-License-Identifier: MPL-2.0
//! Preview rendering: a detached clone of a block's cell grid for the modal.

use crate::cells::CellGrid;
use crate::quilt::Block;

/// A detached copy of one block's grid, shown inside the modal.
///
/// The preview owns its cells; mutating or discarding it never touches the
/// source block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preview {
    grid: CellGrid,
}

/// Clones `block`'s grid for display elsewhere.
///
/// If the cloned grid unexpectedly carries no cells, the cells are
/// regenerated from the block's size attribute using the same sizing rule
/// as startup generation.
#[must_use]
pub fn render_preview(block: &Block) -> Preview {
    let mut grid = block.grid.clone();
    if grid.is_empty() {
        grid = CellGrid::generate(block.effective_grid_size());
    }
    Preview { grid }
}

impl Preview {
    #[must_use]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

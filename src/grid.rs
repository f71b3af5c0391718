//! The 10x10 cell grid owned by each player.

use crate::common::PlacementError;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

const N: usize = BOARD_SIZE as usize;

/// State of one grid cell.
///
/// Legal transitions are `Empty -> Occupied` (placement) and
/// `Occupied -> Hit` (firing). Nothing else moves a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
    Hit,
}

/// Fixed 10x10 grid indexed by (column, row).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[Cell; N]; N],
}

impl Grid {
    /// An all-empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// State of the cell at `at`.
    pub fn get(&self, at: Coordinate) -> Cell {
        self.cells[at.column() as usize][at.row() as usize]
    }

    /// Mark an empty cell as carrying a ship.
    pub fn occupy(&mut self, at: Coordinate) -> Result<(), PlacementError> {
        let cell = &mut self.cells[at.column() as usize][at.row() as usize];
        match *cell {
            Cell::Empty => {
                *cell = Cell::Occupied;
                Ok(())
            }
            Cell::Occupied | Cell::Hit => Err(PlacementError::Overlaps(at)),
        }
    }

    /// Mark an occupied cell as hit. Returns `false`, leaving the cell as it
    /// was, for empty or already hit cells.
    pub fn strike(&mut self, at: Coordinate) -> bool {
        let cell = &mut self.cells[at.column() as usize][at.row() as usize];
        if *cell == Cell::Occupied {
            *cell = Cell::Hit;
            true
        } else {
            false
        }
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|column| column.iter())
            .filter(|&&cell| cell == state)
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

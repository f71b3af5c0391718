//! One player's side of the table: grid, fleet and the shots received.

use alloc::vec::Vec;
use log::{debug, trace};

use crate::common::{PlacementError, ShotResult};
use crate::config::{BOARD_SIZE, MIN_SHIP_LENGTH};
use crate::coord::Coordinate;
use crate::fleet::Fleet;
use crate::game::Role;
use crate::grid::Grid;
use crate::mask::ShotMask;
use crate::ship::{layout, Orientation, Ship};

/// Grid and fleet bookkeeping for a single player.
#[derive(Debug, Clone)]
pub struct PlayerState {
    role: Role,
    grid: Grid,
    fleet: Fleet,
    shots: ShotMask,
}

impl PlayerState {
    /// Empty grid, no ships.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            grid: Grid::new(),
            fleet: Fleet::new(),
            shots: ShotMask::empty(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Cells the opponent has fired at, hits and misses alike.
    pub fn shots(&self) -> &ShotMask {
        &self.shots
    }

    /// Number of ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.fleet.len()
    }

    /// Place a ship of `length` cells starting at `head`.
    ///
    /// Cells are validated in order on a scratch copy of the grid; the copy
    /// only replaces the real grid once every cell fits, so a rejected
    /// placement leaves both grid and fleet untouched.
    pub fn place_ship(
        &mut self,
        length: usize,
        head: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if length < MIN_SHIP_LENGTH {
            trace!("{}: rejected ship of length {}", self.role, length);
            return Err(PlacementError::TooShort { length });
        }

        let mut scratch = self.grid.clone();
        let mut cells = Vec::with_capacity(length.min(BOARD_SIZE as usize));
        for cell in layout(length, head, orientation) {
            let at = cell.ok_or(PlacementError::OutOfBounds)?;
            scratch.occupy(at)?;
            cells.push(at);
        }

        self.grid = scratch;
        self.fleet.insert(Ship::new(head, orientation, cells));
        debug!(
            "{}: placed ship of length {} at {} ({})",
            self.role, length, head, orientation
        );
        Ok(())
    }

    /// Apply an incoming torpedo to fleet and grid.
    pub(crate) fn receive_torpedo(&mut self, at: Coordinate) -> ShotResult {
        self.shots.insert(at);
        let result = self.fleet.strike(at);
        self.grid.strike(at);
        result
    }
}

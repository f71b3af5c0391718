//! A player's ships that are still afloat.

use alloc::collections::BTreeMap;

use crate::common::ShotResult;
use crate::coord::Coordinate;
use crate::ship::Ship;

/// Ships keyed by head coordinate. A ship leaves the fleet as soon as its
/// last cell is hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    ships: BTreeMap<Coordinate, Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, ship: Ship) {
        self.ships.insert(ship.head(), ship);
    }

    /// Resolve a torpedo at `at` against every ship, dropping any ship that
    /// has no cells left.
    pub fn strike(&mut self, at: Coordinate) -> ShotResult {
        let mut result = ShotResult::Miss;
        for (head, ship) in self.ships.iter_mut() {
            if ship.strike(at) {
                result = if ship.is_destroyed() {
                    ShotResult::Sunk(*head)
                } else {
                    ShotResult::Hit
                };
            }
        }
        self.ships.retain(|_, ship| !ship.is_destroyed());
        result
    }

    /// Ship placed from `head`, if it is still afloat.
    pub fn get(&self, head: Coordinate) -> Option<&Ship> {
        self.ships.get(&head)
    }

    /// Ships still afloat, ordered by head coordinate.
    pub fn iter(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    /// Number of ships still afloat.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns `true` once every ship has been destroyed (or none were placed).
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }
}

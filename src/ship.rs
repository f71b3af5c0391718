//! Ship layout and per-ship damage tracking.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::PlacementError;
use crate::coord::Coordinate;

/// Placement direction measured from the ship's head.
///
/// `Row` walks down through increasing row numbers inside one column
/// (`A1, A2, A3`). `Column` walks across increasing column letters inside one
/// row (`A1, B1, C1`). The names follow the historical board convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Row,
    Column,
}

impl FromStr for Orientation {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "R" | "r" => Ok(Orientation::Row),
            "C" | "c" => Ok(Orientation::Column),
            _ => Err(PlacementError::InvalidOrientation),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Row => f.write_str("R"),
            Orientation::Column => f.write_str("C"),
        }
    }
}

/// The `length` cells a ship would cover, head first. A cell that falls off
/// the grid is yielded as `None`.
pub fn layout(
    length: usize,
    head: Coordinate,
    orientation: Orientation,
) -> impl Iterator<Item = Option<Coordinate>> {
    (0..length).map(move |i| head.step(orientation, i))
}

/// A placed ship, keyed in its fleet by `head`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    head: Coordinate,
    orientation: Orientation,
    length: usize,
    remaining: Vec<Coordinate>,
}

impl Ship {
    pub(crate) fn new(head: Coordinate, orientation: Orientation, cells: Vec<Coordinate>) -> Self {
        Self {
            head,
            orientation,
            length: cells.len(),
            remaining: cells,
        }
    }

    /// Cell the ship was placed from, closest to A1.
    pub fn head(&self) -> Coordinate {
        self.head
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Length at placement time.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells not yet hit, in placement order.
    pub fn remaining(&self) -> &[Coordinate] {
        &self.remaining
    }

    /// Remove `at` from the unhit cells. Returns `true` if it was there.
    pub fn strike(&mut self, at: Coordinate) -> bool {
        match self.remaining.iter().position(|&c| c == at) {
            Some(idx) => {
                self.remaining.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Check if every cell of the ship has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.remaining.is_empty()
    }
}

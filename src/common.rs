//! Common types for the rules engine: shot results and error enums.

use core::fmt;

use crate::coord::Coordinate;
use crate::game::{Outcome, Role};

/// Result of an accepted torpedo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// No ship cell was removed: open water, or a cell already hit.
    Miss,
    /// A ship cell was hit and the ship is still afloat.
    Hit,
    /// The last remaining cell of the ship keyed by this head was hit.
    Sunk(Coordinate),
}

/// Errors returned when parsing a coordinate token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCoordError {
    /// Token was empty.
    Empty,
    /// Column letter is not within `A..=J`.
    InvalidColumn(char),
    /// Token had a column but no row.
    MissingRow,
    /// Row is not within `1..=10`.
    InvalidRow,
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::Empty => write!(f, "Empty coordinate"),
            ParseCoordError::InvalidColumn(c) => {
                write!(f, "Invalid column '{}' - must be a letter A-J", c)
            }
            ParseCoordError::MissingRow => write!(f, "Missing row - need e.g. A5"),
            ParseCoordError::InvalidRow => write!(f, "Invalid row - must be a number 1-10"),
        }
    }
}

/// Errors returned by ship placement. Placement is all-or-nothing, so every
/// variant implies the grid and fleet are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship is shorter than the minimum length.
    TooShort { length: usize },
    /// Some cell of the ship falls off the grid.
    OutOfBounds,
    /// Ship would cover an already occupied cell.
    Overlaps(Coordinate),
    /// Firing has started; the fleet is fixed.
    PlacementClosed,
    /// Orientation token was neither `R` nor `C`.
    InvalidOrientation,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::TooShort { length } => {
                write!(f, "Ship of length {} is too short", length)
            }
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlaps(at) => {
                write!(f, "Ship placement overlaps another ship at {}", at)
            }
            PlacementError::PlacementClosed => {
                write!(f, "Ships cannot be placed once firing has started")
            }
            PlacementError::InvalidOrientation => {
                write!(f, "Orientation must be 'R' (row) or 'C' (column)")
            }
        }
    }
}

/// Errors returned by `fire_torpedo`. Neither variant changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireError {
    /// The attacker is not the player whose turn it is.
    NotYourTurn { expected: Role },
    /// The game already has a winner.
    GameOver(Outcome),
}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireError::NotYourTurn { expected } => {
                write!(f, "Not your turn - waiting for {}", expected)
            }
            FireError::GameOver(outcome) => write!(f, "Game is over ({})", outcome),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseCoordError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for FireError {}

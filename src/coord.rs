//! Grid coordinates and their textual form (`"A1"` through `"J10"`).

use core::fmt;
use core::str::FromStr;

use crate::common::ParseCoordError;
use crate::config::{BOARD_SIZE, COLUMN_LABELS};
use crate::ship::Orientation;

/// A cell position on a 10x10 grid.
///
/// Both indices are zero-based and always in bounds: the only ways to build a
/// `Coordinate` are [`Coordinate::new`], [`Coordinate::step`] and parsing, all
/// of which reject positions off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    column: u8,
    row: u8,
}

impl Coordinate {
    /// Build a coordinate from zero-based column and row indices.
    pub fn new(column: u8, row: u8) -> Option<Self> {
        if column < BOARD_SIZE && row < BOARD_SIZE {
            Some(Self { column, row })
        } else {
            None
        }
    }

    /// Zero-based column index (`A` is 0).
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Zero-based row index (row `1` is 0).
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column letter as written on the board.
    pub fn column_label(&self) -> char {
        COLUMN_LABELS[self.column as usize]
    }

    /// Row number as written on the board (1..=10).
    pub fn row_number(&self) -> u8 {
        self.row + 1
    }

    /// The cell `distance` steps away in the direction of `orientation`, or
    /// `None` once that walks off the grid.
    pub fn step(self, orientation: Orientation, distance: usize) -> Option<Self> {
        let (column, row) = (self.column as usize, self.row as usize);
        let (column, row) = match orientation {
            Orientation::Row => (column, row.saturating_add(distance)),
            Orientation::Column => (column.saturating_add(distance), row),
        };
        if column < BOARD_SIZE as usize && row < BOARD_SIZE as usize {
            Some(Self {
                column: column as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Every cell of the grid, column by column.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE)
            .flat_map(|column| (0..BOARD_SIZE).map(move |row| Coordinate { column, row }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_label(), self.row_number())
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordError;

    /// Parse `"B7"`, `"j10"` and the like. A three character token must end
    /// in `10`; a two character token carries a single row digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let col_ch = chars.next().ok_or(ParseCoordError::Empty)?;
        let column = COLUMN_LABELS
            .iter()
            .position(|&label| label == col_ch.to_ascii_uppercase())
            .ok_or(ParseCoordError::InvalidColumn(col_ch))?;
        let row = match chars.as_str().as_bytes() {
            [digit @ b'1'..=b'9'] => digit - b'1',
            [b'1', b'0'] => 9,
            [] => return Err(ParseCoordError::MissingRow),
            _ => return Err(ParseCoordError::InvalidRow),
        };
        Ok(Self {
            column: column as u8,
            row,
        })
    }
}

// Serialized in board notation so coordinates read naturally and can key maps.
#[cfg(feature = "std")]
impl serde::Serialize for Coordinate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Coordinate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = std::string::String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

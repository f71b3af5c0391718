//! Fixed-size cell sets packed into an unsigned integer.
//!
//! Used to remember which cells of a grid have been fired upon. The set is
//! `no_std` friendly and never allocates.

use core::fmt;
use core::mem;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::{BOARD_SIZE, TOTAL_CELLS};
use crate::coord::Coordinate;

/// Errors returned by mask construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The backing integer has fewer bits than the grid has cells.
    SizeTooLarge { cells: usize, capacity: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: {} cells exceed T::BITS={}", cells, capacity)
            }
        }
    }
}

/// A set of grid cells stored as one bit per cell in `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// Mask wide enough for a full 10x10 grid.
pub type ShotMask = CellMask<u128>;

impl<T> CellMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Empty mask. Fails if `T` cannot hold one bit per cell, so every mask
    /// that exists can address the whole grid.
    pub fn try_new() -> Result<Self, MaskError> {
        let capacity = mem::size_of::<T>() * 8;
        if TOTAL_CELLS > capacity {
            Err(MaskError::SizeTooLarge {
                cells: TOTAL_CELLS,
                capacity,
            })
        } else {
            Ok(CellMask { bits: T::zero() })
        }
    }

    #[inline]
    fn bit(at: Coordinate) -> T {
        T::one() << (at.column() as usize * BOARD_SIZE as usize + at.row() as usize)
    }

    /// Whether `at` is in the set.
    #[inline]
    pub fn contains(&self, at: Coordinate) -> bool {
        (self.bits & Self::bit(at)) != T::zero()
    }

    /// Add `at`; returns `true` if it was not already present.
    pub fn insert(&mut self, at: Coordinate) -> bool {
        let fresh = !self.contains(at);
        self.bits = self.bits | Self::bit(at);
        fresh
    }

    /// Number of cells in the set.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Iterator over the cells in the set, column by column.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(move |&at| self.contains(at))
    }
}

impl ShotMask {
    /// Empty mask; `u128` always has room for the grid.
    #[inline]
    pub const fn empty() -> Self {
        CellMask { bits: 0 }
    }
}

impl Default for ShotMask {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for CellMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

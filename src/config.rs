/// Width and height of every grid.
pub const BOARD_SIZE: u8 = 10;

/// Shortest ship that may be placed.
pub const MIN_SHIP_LENGTH: usize = 2;

/// Column labels in board order; the first column is the one closest to A1.
pub const COLUMN_LABELS: [char; BOARD_SIZE as usize] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Number of cells on one grid.
pub const TOTAL_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

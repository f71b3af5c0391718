//! Text views of a grid. Rendering only reads state.

use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use crate::config::{BOARD_SIZE, COLUMN_LABELS};
use crate::coord::Coordinate;
use crate::game::{GameEngine, Role};
use crate::grid::{Cell, Grid};
use crate::player::PlayerState;

fn write_board<W, F>(out: &mut W, symbol: F) -> fmt::Result
where
    W: Write,
    F: Fn(Coordinate) -> char,
{
    out.write_str("   ")?;
    for label in COLUMN_LABELS {
        write!(out, " {}", label)?;
    }
    for row in 0..BOARD_SIZE {
        write!(out, "\n{:2} ", row + 1)?;
        for column in 0..BOARD_SIZE {
            // Both indices come from the board range.
            if let Some(at) = Coordinate::new(column, row) {
                write!(out, " {}", symbol(at))?;
            }
        }
    }
    Ok(())
}

/// A player's board as seen by its owner (`reveal`) or by the opponent.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    player: &'a PlayerState,
    reveal: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(player: &'a PlayerState, reveal: bool) -> Self {
        Self { player, reveal }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(f, |at| match self.player.grid().get(at) {
            Cell::Hit => 'X',
            Cell::Occupied if self.reveal => 'S',
            _ if self.player.shots().contains(at) => 'o',
            _ => '.',
        })
    }
}

/// Render a player's board. With `reveal` unhit ship cells show as `S`;
/// otherwise only hits (`X`) and misses (`o`) are visible.
pub fn render_board(player: &PlayerState, reveal: bool) -> String {
    BoardView::new(player, reveal).to_string()
}

/// One line per ship still afloat: head, orientation and cells left,
/// e.g. `B2 C 1/3`.
pub fn render_fleet(player: &PlayerState) -> String {
    let mut out = String::new();
    for ship in player.fleet().iter() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&ship.head().to_string());
        out.push(' ');
        out.push_str(&ship.orientation().to_string());
        out.push(' ');
        out.push_str(&ship.remaining().len().to_string());
        out.push('/');
        out.push_str(&ship.length().to_string());
    }
    out
}

/// The opponent board (hidden) above `role`'s own board (revealed).
pub fn render_player_view(engine: &GameEngine, role: Role) -> String {
    let mut out = String::from("Opponent board:\n");
    out.push_str(&render_board(engine.player(role.opponent()), false));
    out.push_str("\n\nYour board:\n");
    out.push_str(&render_board(engine.player(role), true));
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(f, |at| match self.get(at) {
            Cell::Empty => '.',
            Cell::Occupied => 'S',
            Cell::Hit => 'X',
        })
    }
}

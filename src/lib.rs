#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod grid;
mod mask;
mod player;
pub mod render;
mod ship;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod script;

pub use common::*;
pub use config::*;
pub use coord::Coordinate;
pub use fleet::Fleet;
pub use game::*;
pub use grid::{Cell, Grid};
pub use mask::{CellMask, MaskError, ShotMask};
pub use player::PlayerState;
pub use render::{render_board, render_fleet, render_player_view, BoardView};
pub use ship::{layout, Orientation, Ship};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};

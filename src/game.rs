use core::fmt;
use core::str::FromStr;

use log::{debug, info, trace};

use crate::{
    common::{FireError, PlacementError, ShotResult},
    coord::Coordinate,
    player::PlayerState,
    ship::Orientation,
};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Role {
    First,
    Second,
}

impl Role {
    /// Both roles in turn order.
    pub const ALL: [Role; 2] = [Role::First, Role::Second];

    /// The other player.
    pub fn opponent(self) -> Role {
        match self {
            Role::First => Role::Second,
            Role::Second => Role::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Role::First => 0,
            Role::Second => 1,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::First => f.write_str("first"),
            Role::Second => f.write_str("second"),
        }
    }
}

/// Error returned when a role name is neither `first` nor `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRoleError;

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unknown player - must be 'first' or 'second'")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first" => Ok(Role::First),
            "second" => Ok(Role::Second),
            _ => Err(ParseRoleError),
        }
    }
}

/// Current result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Outcome {
    Unfinished,
    FirstWon,
    SecondWon,
}

impl Outcome {
    /// Terminal outcome for a win by `role`.
    pub fn won_by(role: Role) -> Self {
        match role {
            Role::First => Outcome::FirstWon,
            Role::Second => Outcome::SecondWon,
        }
    }

    pub fn winner(&self) -> Option<Role> {
        match self {
            Outcome::Unfinished => None,
            Outcome::FirstWon => Some(Role::First),
            Outcome::SecondWon => Some(Role::Second),
        }
    }

    pub fn is_finished(&self) -> bool {
        *self != Outcome::Unfinished
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unfinished => f.write_str("UNFINISHED"),
            Outcome::FirstWon => f.write_str("FIRST_WON"),
            Outcome::SecondWon => f.write_str("SECOND_WON"),
        }
    }
}

/// Rules engine for one game: both players, turn order and the outcome.
///
/// `first` always fires first. Ships may be placed for either player until
/// the first accepted torpedo; from then on the fleets are fixed.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: [PlayerState; 2],
    turn: Role,
    outcome: Outcome,
    firing_started: bool,
}

impl GameEngine {
    /// Create a new game with two empty grids.
    pub fn new() -> Self {
        Self {
            players: [PlayerState::new(Role::First), PlayerState::new(Role::Second)],
            turn: Role::First,
            outcome: Outcome::Unfinished,
            firing_started: false,
        }
    }

    /// Immutable view of one player's state, e.g. for rendering.
    pub fn player(&self, role: Role) -> &PlayerState {
        &self.players[role.index()]
    }

    /// Player allowed to fire next.
    pub fn turn(&self) -> Role {
        self.turn
    }

    /// Whether ships may still be placed.
    pub fn placement_open(&self) -> bool {
        !self.firing_started
    }

    /// Place a ship for `role`. See [`PlayerState::place_ship`].
    pub fn place_ship(
        &mut self,
        role: Role,
        length: usize,
        head: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if self.firing_started {
            trace!("{}: placement after firing started", role);
            return Err(PlacementError::PlacementClosed);
        }
        self.players[role.index()].place_ship(length, head, orientation)
    }

    /// Fire a torpedo from `attacker` at `target` on the opponent's grid.
    ///
    /// Rejected, with no state change, if it is not the attacker's turn or the
    /// game is already over (checked in that order). An accepted shot always
    /// passes the turn to the defender, hit or miss.
    pub fn fire_torpedo(
        &mut self,
        attacker: Role,
        target: Coordinate,
    ) -> Result<ShotResult, FireError> {
        if attacker != self.turn {
            trace!("{}: fired out of turn", attacker);
            return Err(FireError::NotYourTurn {
                expected: self.turn,
            });
        }
        if self.outcome.is_finished() {
            trace!("{}: fired after the game ended", attacker);
            return Err(FireError::GameOver(self.outcome));
        }

        let defender = attacker.opponent();
        self.turn = defender;
        self.firing_started = true;

        let defending = &mut self.players[defender.index()];
        let result = defending.receive_torpedo(target);
        debug!("{} fired at {}: {:?}", attacker, target, result);

        if defending.fleet().is_empty() {
            self.outcome = Outcome::won_by(attacker);
            info!("{} destroyed the last ship: {}", attacker, self.outcome);
        }
        Ok(result)
    }

    /// Current outcome.
    pub fn current_state(&self) -> Outcome {
        self.outcome
    }

    /// Ships of `role` still afloat.
    pub fn ships_remaining(&self, role: Role) -> usize {
        self.player(role).ships_remaining()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Replay of scripted games.
//!
//! A script holds one command per line; blank lines and `#` comments are
//! skipped:
//!
//! ```text
//! place second 2 A1 R
//! fire first A1
//! ```
#![cfg(feature = "std")]

use std::fmt;

use anyhow::{anyhow, bail, Context};

use crate::{
    common::{FireError, PlacementError, ShotResult},
    coord::Coordinate,
    game::{GameEngine, Role},
    ship::Orientation,
};

/// A single scripted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place {
        role: Role,
        length: usize,
        head: Coordinate,
        orientation: Orientation,
    },
    Fire {
        role: Role,
        target: Coordinate,
    },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place {
                role,
                length,
                head,
                orientation,
            } => write!(f, "place {} {} {} {}", role, length, head, orientation),
            Command::Fire { role, target } => write!(f, "fire {} {}", role, target),
        }
    }
}

/// What the engine made of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Placed,
    Shot(ShotResult),
    PlacementRejected(PlacementError),
    FireRejected(FireError),
}

impl Verdict {
    pub fn accepted(&self) -> bool {
        matches!(self, Verdict::Placed | Verdict::Shot(_))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Placed => f.write_str("placed"),
            Verdict::Shot(ShotResult::Miss) => f.write_str("miss"),
            Verdict::Shot(ShotResult::Hit) => f.write_str("hit"),
            Verdict::Shot(ShotResult::Sunk(head)) => write!(f, "sunk ship at {}", head),
            Verdict::PlacementRejected(e) => write!(f, "rejected: {}", e),
            Verdict::FireRejected(e) => write!(f, "rejected: {}", e),
        }
    }
}

/// A command together with its source line and result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub command: Command,
    pub verdict: Verdict,
}

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["place", role, length, head, orientation] => Ok(Command::Place {
            role: role.parse()?,
            length: length
                .parse::<usize>()
                .map_err(|_| anyhow!("Invalid ship length '{}'", length))?,
            head: head.parse()?,
            orientation: orientation.parse()?,
        }),
        ["fire", role, target] => Ok(Command::Fire {
            role: role.parse()?,
            target: target.parse()?,
        }),
        ["place", ..] => bail!("expected: place <first|second> <length> <head> <R|C>"),
        ["fire", ..] => bail!("expected: fire <first|second> <target>"),
        [other, ..] => bail!("Unknown command '{}'", other),
        [] => bail!("Empty command"),
    }
}

/// Parse a whole script into `(line number, command)` pairs. Line numbers
/// start at 1.
pub fn parse_script(text: &str) -> anyhow::Result<Vec<(usize, Command)>> {
    let mut commands = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let command =
            parse_command(line).with_context(|| format!("line {}: '{}'", idx + 1, line))?;
        commands.push((idx + 1, command));
    }
    Ok(commands)
}

/// Apply each command in order. Rules rejections are recorded in the
/// returned steps and do not stop the replay.
pub fn run(engine: &mut GameEngine, commands: &[(usize, Command)]) -> Vec<Step> {
    commands
        .iter()
        .map(|&(line, command)| {
            let verdict = match command {
                Command::Place {
                    role,
                    length,
                    head,
                    orientation,
                } => match engine.place_ship(role, length, head, orientation) {
                    Ok(()) => Verdict::Placed,
                    Err(e) => Verdict::PlacementRejected(e),
                },
                Command::Fire { role, target } => match engine.fire_torpedo(role, target) {
                    Ok(result) => Verdict::Shot(result),
                    Err(e) => Verdict::FireRejected(e),
                },
            };
            Step {
                line,
                command,
                verdict,
            }
        })
        .collect()
}

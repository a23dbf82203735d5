use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Distance covered by one directional move, one block width
pub const MOVE_STEP: i32 = 30;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) of one step in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -MOVE_STEP),
            Direction::Down => (0, MOVE_STEP),
            Direction::Left => (-MOVE_STEP, 0),
            Direction::Right => (MOVE_STEP, 0),
        }
    }

    /// Parses `U/D/L/R` or `W/S/A/D`, case-insensitive
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'U' | 'W' => Some(Direction::Up),
            'D' | 'S' => Some(Direction::Down),
            'L' | 'A' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Parse a move script such as `"RRD, LLU"`.
///
/// Whitespace and commas are separators. `D` always means down; use `R` for
/// right when writing WASD-style scripts.
pub fn parse_script(script: &str) -> Result<Vec<Direction>> {
    let mut moves = Vec::with_capacity(script.len());

    for (offset, c) in script.char_indices() {
        if c.is_whitespace() || c == ',' {
            continue;
        }
        match Direction::from_char(c) {
            Some(direction) => moves.push(direction),
            None => bail!("invalid move '{}' at offset {}", c, offset),
        }
    }

    Ok(moves)
}

use std::str::FromStr;

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Serialize};

/// Direction in which all tiles slide during a turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
    #[display("up")]
    Up,
    #[display("down")]
    Down,
}

impl Move {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the WASD key conventionally bound to this move.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Left => 'a',
            Self::Right => 'd',
            Self::Up => 'w',
            Self::Down => 's',
        }
    }
}

/// Error returned when text cannot be parsed as a [`Move`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid move {input:?}: expected one of W/A/S/D or up/left/down/right")]
pub struct ParseMoveError {
    input: String,
}

/// Parses a move case-insensitively from a WASD key or a direction name.
///
/// ```
/// use twenty48_engine::Move;
///
/// assert_eq!("W".parse(), Ok(Move::Up));
/// assert_eq!("left".parse(), Ok(Move::Left));
/// assert!("x".parse::<Move>().is_err());
/// ```
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mv = match s.to_ascii_lowercase().as_str() {
            "a" | "left" => Self::Left,
            "d" | "right" => Self::Right,
            "w" | "up" => Self::Up,
            "s" | "down" => Self::Down,
            _ => {
                return Err(ParseMoveError {
                    input: s.to_owned(),
                });
            }
        };
        Ok(mv)
    }
}

/// Samples one of the four moves uniformly.
impl Distribution<Move> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        Move::ALL[rng.random_range(0..Move::ALL.len())]
    }
}

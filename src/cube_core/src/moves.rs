//! Standard cube move notation: a face letter optionally followed by `'`
//! (counter-clockwise) or `2` (half turn).

use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use itertools::Itertools;

use crate::{
    error::{CubeError, ParseError},
    face::Face,
};

/// How far to turn a face. Directions are as seen when looking straight at
/// the face from outside the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turns {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Turns {
    pub const ALL: [Self; 3] = [Turns::Clockwise, Turns::CounterClockwise, Turns::Half];

    /// The number of clockwise quarter turns this amounts to.
    pub fn quarter_turns(self) -> usize {
        match self {
            Turns::Clockwise => 1,
            Turns::Half => 2,
            Turns::CounterClockwise => 3,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Turns::Clockwise => Turns::CounterClockwise,
            Turns::CounterClockwise => Turns::Clockwise,
            Turns::Half => Turns::Half,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turns::Clockwise => "",
            Turns::CounterClockwise => "'",
            Turns::Half => "2",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Turns::Clockwise => "clockwise",
            Turns::CounterClockwise => "counter-clockwise",
            Turns::Half => "180 degrees",
        }
    }
}

impl TryFrom<i8> for Turns {
    type Error = CubeError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Turns::Clockwise),
            -1 => Ok(Turns::CounterClockwise),
            2 => Ok(Turns::Half),
            _ => Err(CubeError::InvalidTurns(value)),
        }
    }
}

impl From<Turns> for i8 {
    fn from(value: Turns) -> Self {
        match value {
            Turns::Clockwise => 1,
            Turns::CounterClockwise => -1,
            Turns::Half => 2,
        }
    }
}

/// A single face turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turns: Turns,
}

impl Move {
    pub fn new(face: Face, turns: Turns) -> Self {
        Self { face, turns }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            turns: self.turns.inverse(),
        }
    }

    /// A human readable description, e.g. "Front (Green) clockwise".
    pub fn describe(self) -> String {
        format!(
            "{} ({}) {}",
            self.face.name(),
            self.face.home_color().name(),
            self.turns.description()
        )
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.turns.suffix())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidMove(s.to_owned());

        let mut chars = s.chars();
        let face = chars.next().ok_or_else(invalid)?;
        let face = face
            .to_string()
            .parse::<Face>()
            .map_err(|_| invalid())?;
        let turns = match chars.as_str() {
            "" => Turns::Clockwise,
            "'" => Turns::CounterClockwise,
            "2" => Turns::Half,
            _ => return Err(invalid()),
        };

        Ok(Move { face, turns })
    }
}

/// Every move of a single face: 6 faces times 3 turn amounts.
pub const ALL_MOVES: [Move; 18] = {
    let mut moves = [Move {
        face: Face::U,
        turns: Turns::Clockwise,
    }; 18];

    let mut i = 0;
    while i < moves.len() {
        moves[i] = Move {
            face: Face::ALL[i / 3],
            turns: Turns::ALL[i % 3],
        };
        i += 1;
    }

    moves
};

/// An ordered list of moves, used for scrambles and the move history.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveSequence(pub Vec<Move>);

impl MoveSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sequence that undoes this one: the moves reversed, each inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        MoveSequence(self.iter().rev().map(|mv| mv.inverse()).collect())
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Move>).collect()
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

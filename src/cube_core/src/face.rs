use std::{fmt::Display, str::FromStr};

use crate::{color::Color, error::ParseError};

/// The faces of the cube. The discriminants give the storage order, which is
/// also the face order of a facelet string.
///
/// - U: top face
/// - R: right face
/// - F: front face
/// - D: bottom face
/// - L: left face
/// - B: back face
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, R, F, D, L, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
            Face::L => Face::R,
            Face::R => Face::L,
        }
    }

    /// The color every sticker of this face shows on a solved cube.
    pub fn home_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::B => Color::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::U => "Up",
            Face::R => "Right",
            Face::F => "Front",
            Face::D => "Down",
            Face::L => "Left",
            Face::B => "Back",
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for Face {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "R" => Ok(Face::R),
            "F" => Ok(Face::F),
            "D" => Ok(Face::D),
            "L" => Ok(Face::L),
            "B" => Ok(Face::B),
            _ => Err(ParseError::UnknownFace(s.to_owned())),
        }
    }
}

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A sticker color. Every color starts out on exactly one face, see
/// `Face::home_color`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    White,
    Green,
    Red,
    Blue,
    Orange,
    Yellow,
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [White, Green, Red, Blue, Orange, Yellow];

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

    /// The single letter used for this color in facelet strings.
    pub fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Color::ALL.into_iter().find(|color| color.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Green => "Green",
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
        }
    }

    /// Default display color as `(r, g, b)`.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::White => (0xff, 0xff, 0xff),
            Color::Green => (0x40, 0xc0, 0x57),
            Color::Red => (0xfa, 0x52, 0x52),
            Color::Blue => (0x22, 0x8b, 0xe6),
            Color::Orange => (0xfd, 0x7e, 0x14),
            Color::Yellow => (0xff, 0xd4, 0x3b),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parses either the one letter code (`"G"`) or the full name (`"green"`,
/// case insensitive).
impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            if let Some(color) = Color::from_code(code.to_ascii_uppercase()) {
                return Ok(color);
            }
        }

        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownColor(s.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.name().to_owned()
    }
}

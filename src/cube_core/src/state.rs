use std::{
    fmt::Display,
    ops::{Index, IndexMut},
    str::FromStr,
};

use itertools::Itertools;

use crate::{
    STICKERS_PER_FACE,
    color::Color,
    error::ParseError,
    face::Face,
    layout::{ADJACENT_STRIPS, CENTER, CLOCKWISE, NET_POSITIONS},
    moves::Move,
};

pub const FACELET_COUNT: usize = 6 * STICKERS_PER_FACE;

/// The colors of all 54 stickers, one row-major grid per face.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct CubeState {
    faces: [[Color; STICKERS_PER_FACE]; 6],
}

impl Default for CubeState {
    fn default() -> CubeState {
        CubeState::solved()
    }
}

impl Index<Face> for CubeState {
    type Output = [Color; STICKERS_PER_FACE];

    fn index(&self, face: Face) -> &Self::Output {
        &self.faces[face.index()]
    }
}

impl IndexMut<Face> for CubeState {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.faces[face.index()]
    }
}

impl CubeState {
    pub fn solved() -> CubeState {
        CubeState {
            faces: Face::ALL.map(|face| [face.home_color(); STICKERS_PER_FACE]),
        }
    }

    pub fn center(&self, face: Face) -> Color {
        self[face][CENTER]
    }

    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let center = self.center(face);
            self[face].iter().all(|&color| color == center)
        })
    }

    /// How many stickers of each color there are, indexed by `Color::index`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &color in self.faces.iter().flatten() {
            counts[color.index()] += 1;
        }
        counts
    }

    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.faces.iter().flatten().copied()
    }

    fn quarter_turn(&mut self, face: Face) {
        let old = self[face];
        for (position, &from) in CLOCKWISE.iter().enumerate() {
            self[face][position] = old[from];
        }

        let strips = &ADJACENT_STRIPS[face.index()];
        let read = |state: &CubeState, k: usize| strips[k].positions.map(|p| state[strips[k].face][p]);

        let carried = read(self, 3);
        for k in (1..4).rev() {
            let moved = read(self, k - 1);
            for (&position, color) in strips[k].positions.iter().zip(moved) {
                self[strips[k].face][position] = color;
            }
        }
        for (&position, color) in strips[0].positions.iter().zip(carried) {
            self[strips[0].face][position] = color;
        }
    }

    /// Applies a move to the cube in place.
    pub fn apply_move(&mut self, mv: Move) {
        for _ in 0..mv.turns.quarter_turns() {
            self.quarter_turn(mv.face);
        }
    }

    /// Applies a sequence of moves, in order.
    pub fn apply_moves<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &mv in moves {
            self.apply_move(mv);
        }
    }

    /// The unfolded net as a 9 by 12 grid of stickers; cells outside the
    /// net are `None`. See the `layout` module for the arrangement.
    pub fn net(&self) -> [[Option<Color>; 12]; 9] {
        let mut grid = [[None; 12]; 9];
        for face in Face::ALL {
            let (face_row, face_col) = NET_POSITIONS[face.index()];
            for (position, &color) in self[face].iter().enumerate() {
                grid[face_row * 3 + position / 3][face_col * 3 + position % 3] = Some(color);
            }
        }
        grid
    }

    /// The facelet string of this state: 54 color codes, faces in
    /// `Face::ALL` order.
    pub fn to_facelets(&self) -> String {
        self.stickers().map(Color::code).collect()
    }
}

/// Parses a facelet string. Whitespace is ignored, so the faces may be
/// written as separate groups.
impl FromStr for CubeState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| Color::from_code(c).ok_or_else(|| ParseError::UnknownColor(c.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        if colors.len() != FACELET_COUNT {
            return Err(ParseError::FaceletCount {
                expected: FACELET_COUNT,
                actual: colors.len(),
            });
        }

        let mut state = CubeState::solved();
        for (face, chunk) in Face::ALL.into_iter().zip(colors.chunks(STICKERS_PER_FACE)) {
            state[face].copy_from_slice(chunk);
        }
        Ok(state)
    }
}

impl Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = self.net().map(|row| {
            row.iter()
                .map(|cell| cell.map_or(' ', Color::code))
                .join(" ")
                .trim_end()
                .to_owned()
        });
        write!(f, "{}", lines.iter().join("\n"))
    }
}

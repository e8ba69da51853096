use std::fmt::Display;

use itertools::Itertools;

use crate::{
    STICKERS_PER_FACE,
    color::Color,
    face::Face,
    layout::{CORNERS, EDGES, Facelet},
    state::CubeState,
};

/// A broken invariant found by `validate`. These are reported, never
/// returned as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two or more faces share a center color. Lists each repeated color
    /// once.
    DuplicateCenters(Vec<Color>),
    /// The corner pieces do not form 8 distinct color triplets.
    InvalidCorners { distinct: usize },
    /// The edge pieces do not form 12 distinct color pairs.
    InvalidEdges { distinct: usize },
    /// A color does not appear exactly 9 times.
    ColorCount { color: Color, count: usize },
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::DuplicateCenters(colors) => write!(
                f,
                "Duplicate center colors ({}), each face must have a unique center",
                colors.iter().map(|c| c.name()).join(", ")
            ),
            Violation::InvalidCorners { distinct } => write!(
                f,
                "Invalid corners, expected {} distinct corner pieces but found {distinct}",
                CORNERS.len()
            ),
            Violation::InvalidEdges { distinct } => write!(
                f,
                "Invalid edges, expected {} distinct edge pieces but found {distinct}",
                EDGES.len()
            ),
            Violation::ColorCount { color, count } => write!(
                f,
                "{} should appear exactly {STICKERS_PER_FACE} times but appears {count} times",
                color.name()
            ),
        }
    }
}

/// Everything `validate` found wrong with a state, in check order. Empty
/// means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            return write!(f, "Cube is valid");
        }
        write!(
            f,
            "{}",
            self.violations
                .iter()
                .enumerate()
                .map(|(i, violation)| format!("{}. {violation}", i + 1))
                .join("\n")
        )
    }
}

/// The number of distinct sorted color keys among `pieces`, or `None` if
/// every piece has its own key.
fn repeated_pieces<const N: usize>(
    state: &CubeState,
    pieces: &[[Facelet; N]],
) -> Option<usize> {
    let counts = pieces
        .iter()
        .map(|piece| {
            piece
                .iter()
                .map(|&(face, position)| state[face][position])
                .sorted()
                .collect_vec()
        })
        .counts();

    if counts.len() == pieces.len() && counts.values().all(|&count| count == 1) {
        None
    } else {
        Some(counts.len())
    }
}

/// Checks the reachability invariants of `state`. Runs every check and
/// collects all violations, in this order: centers, corners, edges, color
/// counts.
pub fn validate(state: &CubeState) -> ValidationReport {
    let mut violations = vec![];

    let repeated_centers = Face::ALL
        .into_iter()
        .map(|face| state.center(face))
        .duplicates()
        .sorted()
        .collect_vec();
    if !repeated_centers.is_empty() {
        violations.push(Violation::DuplicateCenters(repeated_centers));
    }

    if let Some(distinct) = repeated_pieces(state, &CORNERS) {
        violations.push(Violation::InvalidCorners { distinct });
    }

    if let Some(distinct) = repeated_pieces(state, &EDGES) {
        violations.push(Violation::InvalidEdges { distinct });
    }

    let counts = state.color_counts();
    for color in Color::ALL {
        let count = counts[color.index()];
        if count != STICKERS_PER_FACE {
            violations.push(Violation::ColorCount { color, count });
        }
    }

    ValidationReport { violations }
}

//! A sticker-level model of a 3x3x3 Rubik's Cube.
//!
//! The state is six faces of nine stickers each. Face turns permute the
//! turning face and the four strips of its neighbors through a single static
//! adjacency table (see [`layout`]), and [`validate`] checks the invariants a
//! physically reachable sticker arrangement must satisfy.
#![warn(clippy::pedantic)]

pub mod color;
pub mod error;
pub mod face;
pub mod layout;
pub mod model;
pub mod moves;
pub mod state;
pub mod validate;

pub use color::Color;
pub use error::{CubeError, ParseError};
pub use face::Face;
pub use model::{CubeModel, DEFAULT_SCRAMBLE_LENGTH};
pub use moves::{ALL_MOVES, Move, MoveSequence, Turns};
pub use state::CubeState;
pub use validate::{ValidationReport, Violation, validate};

/// Stickers on one face of the cube.
pub const STICKERS_PER_FACE: usize = 9;

use thiserror::Error;

use crate::STICKERS_PER_FACE;

/// An out-of-range argument passed to a `CubeModel` operation. These are
/// programming errors on the caller's side and are never clamped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid turn amount, expected one of 1, -1 or 2 but got {0}")]
    InvalidTurns(i8),
    #[error(
        "Sticker position out of range, expected a value between 0 and {max} but got {0}",
        max = STICKERS_PER_FACE - 1
    )]
    PositionOutOfRange(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown face {0:?}, expected one of U, D, F, B, L or R")]
    UnknownFace(String),
    #[error("Invalid move {0:?}")]
    InvalidMove(String),
    #[error("Unknown color code {0:?}, expected one of W, G, R, B, O or Y")]
    UnknownColor(String),
    #[error("Invalid facelet count, expected {expected} stickers but got {actual}")]
    FaceletCount { expected: usize, actual: usize },
}

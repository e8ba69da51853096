//! Fixed geometry of the sticker grid.
//!
//! Every face is stored row-major as seen from outside the cube, laid out as
//! the usual unfolded net:
//!
//! ```text
//!           U0 U1 U2
//!           U3 U4 U5
//!           U6 U7 U8
//! L0 L1 L2  F0 F1 F2  R0 R1 R2  B0 B1 B2
//! L3 L4 L5  F3 F4 F5  R3 R4 R5  B3 B4 B5
//! L6 L7 L8  F6 F7 F8  R6 R7 R8  B6 B7 B8
//!           D0 D1 D2
//!           D3 D4 D5
//!           D6 D7 D8
//! ```
//!
//! All tables here are derived from that net by the right-hand rule around
//! each face's outward normal.

use crate::face::Face::{self, B, D, F, L, R, U};

/// A single sticker, addressed by face and row-major position.
pub type Facelet = (Face, usize);

/// Position of the center sticker of every face.
pub const CENTER: usize = 4;

/// `CLOCKWISE[i]` is the position whose sticker moves to position `i` when
/// the face turns clockwise.
pub(crate) const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// One row or column of a face that borders another face.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Strip {
    pub face: Face,
    pub positions: [usize; 3],
}

const fn strip(face: Face, positions: [usize; 3]) -> Strip {
    Strip { face, positions }
}

/// For every face (indexed by `Face::index`), the four strips of its
/// neighbors that travel with it, in clockwise order. A clockwise turn moves
/// the sticker at `strips[k].positions[j]` to `strips[k + 1].positions[j]`,
/// wrapping around from the last strip to the first.
pub(crate) const ADJACENT_STRIPS: [[Strip; 4]; 6] = [
    // U
    [
        strip(F, [0, 1, 2]),
        strip(L, [0, 1, 2]),
        strip(B, [0, 1, 2]),
        strip(R, [0, 1, 2]),
    ],
    // R
    [
        strip(U, [2, 5, 8]),
        strip(B, [6, 3, 0]),
        strip(D, [2, 5, 8]),
        strip(F, [2, 5, 8]),
    ],
    // F
    [
        strip(U, [6, 7, 8]),
        strip(R, [0, 3, 6]),
        strip(D, [2, 1, 0]),
        strip(L, [8, 5, 2]),
    ],
    // D
    [
        strip(F, [6, 7, 8]),
        strip(R, [6, 7, 8]),
        strip(B, [6, 7, 8]),
        strip(L, [6, 7, 8]),
    ],
    // L
    [
        strip(U, [0, 3, 6]),
        strip(F, [0, 3, 6]),
        strip(D, [0, 3, 6]),
        strip(B, [8, 5, 2]),
    ],
    // B
    [
        strip(U, [0, 1, 2]),
        strip(L, [6, 3, 0]),
        strip(D, [8, 7, 6]),
        strip(R, [2, 5, 8]),
    ],
];

/// The three stickers of every corner piece.
pub const CORNERS: [[Facelet; 3]; 8] = [
    [(U, 0), (L, 0), (B, 2)],
    [(U, 2), (B, 0), (R, 2)],
    [(U, 6), (F, 0), (L, 2)],
    [(U, 8), (R, 0), (F, 2)],
    [(D, 0), (F, 6), (L, 8)],
    [(D, 2), (R, 6), (F, 8)],
    [(D, 6), (L, 6), (B, 8)],
    [(D, 8), (B, 6), (R, 8)],
];

/// The two stickers of every edge piece.
pub const EDGES: [[Facelet; 2]; 12] = [
    [(U, 1), (B, 1)],
    [(U, 3), (L, 1)],
    [(U, 5), (R, 1)],
    [(U, 7), (F, 1)],
    [(F, 3), (L, 5)],
    [(F, 5), (R, 3)],
    [(B, 3), (R, 5)],
    [(B, 5), (L, 3)],
    [(D, 1), (F, 7)],
    [(D, 3), (L, 7)],
    [(D, 5), (R, 7)],
    [(D, 7), (B, 7)],
];

/// The other stickers of the piece `facelet` belongs to. Empty for centers.
pub fn piece_partners(facelet: Facelet) -> Vec<Facelet> {
    CORNERS
        .iter()
        .map(<[Facelet; 3]>::as_slice)
        .chain(EDGES.iter().map(<[Facelet; 2]>::as_slice))
        .find(|piece| piece.contains(&facelet))
        .map(|piece| {
            piece
                .iter()
                .copied()
                .filter(|&other| other != facelet)
                .collect()
        })
        .unwrap_or_default()
}

/// Where each face sits in the unfolded net, as `(row, column)` in units of
/// whole faces.
pub const NET_POSITIONS: [(usize, usize); 6] = [(0, 1), (1, 2), (1, 1), (2, 1), (1, 0), (1, 3)];

use log::{debug, trace};

use crate::{
    STICKERS_PER_FACE,
    color::Color,
    error::CubeError,
    face::Face,
    layout::{self, CENTER, Facelet},
    moves::{ALL_MOVES, Move, MoveSequence, Turns},
    state::CubeState,
    validate::{ValidationReport, validate},
};

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// An owned cube that a user interface drives: it turns faces, paints
/// stickers and reports whether the result is a legal cube.
///
/// The model also remembers the moves applied since the last reset so they
/// can be undone one at a time. Painting a sticker or loading a state
/// forgets them, since the stickers no longer follow from those moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CubeModel {
    state: CubeState,
    history: MoveSequence,
}

fn check_position(position: usize) -> Result<(), CubeError> {
    if position < STICKERS_PER_FACE {
        Ok(())
    } else {
        Err(CubeError::PositionOutOfRange(position))
    }
}

impl CubeModel {
    /// A solved cube with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn history(&self) -> &MoveSequence {
        &self.history
    }

    /// Returns every sticker to its face's home color and forgets the
    /// history.
    pub fn reset(&mut self) {
        debug!("Resetting cube");
        self.state = CubeState::solved();
        self.history.clear();
    }

    /// Replaces every sticker at once, e.g. with a parsed facelet string.
    pub fn load(&mut self, state: CubeState) {
        debug!("Loading state {}", state.to_facelets());
        self.state = state;
        self.history.clear();
    }

    /// Turns `face` by `turns` quarter turns: 1 is clockwise, -1 is
    /// counter-clockwise and 2 is a half turn.
    ///
    /// # Errors
    ///
    /// If `turns` is any other value.
    pub fn rotate(&mut self, face: Face, turns: i8) -> Result<(), CubeError> {
        let turns = Turns::try_from(turns)?;
        self.apply(Move::new(face, turns));
        Ok(())
    }

    pub fn apply(&mut self, mv: Move) {
        trace!("Applying {mv}");
        self.state.apply_move(mv);
        self.history.push(mv);
    }

    pub fn apply_sequence(&mut self, moves: &MoveSequence) {
        debug!("Applying {} moves", moves.len());
        for &mv in moves.iter() {
            self.apply(mv);
        }
    }

    /// Undoes the most recent move, returning it. Does nothing if there is
    /// no history.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        trace!("Undoing {mv}");
        self.state.apply_move(mv.inverse());
        Some(mv)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Resets the cube and applies `length` random moves, each face and turn
    /// amount equally likely. The scramble becomes the history.
    pub fn scramble(&mut self, rng: &mut fastrand::Rng, length: usize) -> MoveSequence {
        self.reset();
        let scramble: MoveSequence = (0..length)
            .map(|_| ALL_MOVES[rng.usize(..ALL_MOVES.len())])
            .collect();
        debug!("Scrambling with {scramble}");
        self.apply_sequence(&scramble);
        scramble
    }

    /// Reads one sticker.
    ///
    /// # Errors
    ///
    /// If `position` is not between 0 and 8.
    pub fn sticker(&self, face: Face, position: usize) -> Result<Color, CubeError> {
        check_position(position)?;
        Ok(self.state[face][position])
    }

    /// Paints one sticker. The result may be an unreachable cube; use
    /// `validate` to find out.
    ///
    /// # Errors
    ///
    /// If `position` is not between 0 and 8.
    pub fn set_sticker(
        &mut self,
        face: Face,
        position: usize,
        color: Color,
    ) -> Result<(), CubeError> {
        check_position(position)?;
        trace!("Painting {face}{position} {}", color.name());
        self.state[face][position] = color;
        self.history.clear();
        Ok(())
    }

    /// The other stickers on the same piece as the given one, with their
    /// current colors. Empty for centers.
    ///
    /// # Errors
    ///
    /// If `position` is not between 0 and 8.
    pub fn adjacent_stickers(
        &self,
        face: Face,
        position: usize,
    ) -> Result<Vec<(Facelet, Color)>, CubeError> {
        check_position(position)?;
        Ok(layout::piece_partners((face, position))
            .into_iter()
            .map(|(other, other_position)| {
                ((other, other_position), self.state[other][other_position])
            })
            .collect())
    }

    /// The face whose center currently shows `color`, if any.
    pub fn face_with_center(&self, color: Color) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|&face| self.state[face][CENTER] == color)
    }

    pub fn validate(&self) -> ValidationReport {
        let report = validate(&self.state);
        debug!("Validation found {} violations", report.violations.len());
        report
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_rejects_bad_turns() {
        let mut model = CubeModel::new();
        for bad in [0, 3, -2, 4] {
            assert_eq!(model.rotate(Face::R, bad), Err(CubeError::InvalidTurns(bad)));
        }
        assert!(model.is_solved());
        assert!(model.history().is_empty());
    }

    #[test]
    fn sticker_positions_are_checked() {
        let mut model = CubeModel::new();
        assert_eq!(model.sticker(Face::F, 8), Ok(Color::Green));
        assert_eq!(
            model.sticker(Face::F, 9),
            Err(CubeError::PositionOutOfRange(9))
        );
        assert_eq!(
            model.set_sticker(Face::F, 9, Color::Red),
            Err(CubeError::PositionOutOfRange(9))
        );
        assert_eq!(
            model.adjacent_stickers(Face::F, 42),
            Err(CubeError::PositionOutOfRange(42))
        );
        assert!(model.is_solved());
    }

    #[test]
    fn set_sticker_clears_history() {
        let mut model = CubeModel::new();
        model.rotate(Face::U, 1).unwrap();
        assert_eq!(model.history().len(), 1);
        model.set_sticker(Face::D, 0, Color::White).unwrap();
        assert!(model.history().is_empty());
        assert_eq!(model.sticker(Face::D, 0), Ok(Color::White));
        assert_eq!(model.undo(), None);
    }

    #[test]
    fn clear_history_keeps_stickers() {
        let mut model = CubeModel::new();
        model.apply_sequence(&"R U F'".parse().unwrap());
        let before = model.state().clone();
        model.clear_history();
        assert!(model.history().is_empty());
        assert_eq!(model.state(), &before);
        assert_eq!(model.undo(), None);
        assert_eq!(model.state(), &before);
    }

    #[test]
    fn undo_restores_previous_states() {
        let mut model = CubeModel::new();
        let mut states = vec![model.state().clone()];
        for mv in "R U' F2 L D B'".parse::<MoveSequence>().unwrap().iter() {
            model.apply(*mv);
            states.push(model.state().clone());
        }
        states.pop();
        while let Some(expected) = states.pop() {
            assert!(model.undo().is_some());
            assert_eq!(model.state(), &expected);
        }
        assert!(model.is_solved());
        assert_eq!(model.undo(), None);
    }

    #[test]
    fn adjacent_stickers_follow_the_piece() {
        let mut model = CubeModel::new();
        assert_eq!(
            model.adjacent_stickers(Face::U, 7),
            Ok(vec![((Face::F, 1), Color::Green)])
        );
        assert_eq!(model.adjacent_stickers(Face::U, 4), Ok(vec![]));
        model.rotate(Face::F, 1).unwrap();
        // The UF edge's white now sits on R3, next to F5.
        assert_eq!(model.sticker(Face::R, 3), Ok(Color::White));
        assert_eq!(
            model.adjacent_stickers(Face::R, 3),
            Ok(vec![((Face::F, 5), Color::Green)])
        );
    }

    #[test]
    fn face_with_center() {
        let mut model = CubeModel::new();
        for face in Face::ALL {
            assert_eq!(model.face_with_center(face.home_color()), Some(face));
        }
        model.set_sticker(Face::U, CENTER, Color::Green).unwrap();
        assert_eq!(model.face_with_center(Color::White), None);
        assert_eq!(model.face_with_center(Color::Green), Some(Face::U));
    }

    #[test]
    fn seeded_scrambles_repeat() {
        let mut a = CubeModel::new();
        let mut b = CubeModel::new();
        let scramble_a = a.scramble(&mut fastrand::Rng::with_seed(7), DEFAULT_SCRAMBLE_LENGTH);
        let scramble_b = b.scramble(&mut fastrand::Rng::with_seed(7), DEFAULT_SCRAMBLE_LENGTH);
        assert_eq!(scramble_a.len(), DEFAULT_SCRAMBLE_LENGTH);
        assert_eq!(scramble_a, scramble_b);
        assert_eq!(a, b);
        assert_eq!(a.history(), &scramble_a);
    }

    #[test]
    fn scramble_starts_from_solved() {
        let mut model = CubeModel::new();
        model.rotate(Face::R, 1).unwrap();
        let scramble = model.scramble(&mut fastrand::Rng::with_seed(1), 0);
        assert!(scramble.is_empty());
        assert!(model.is_solved());
    }
}

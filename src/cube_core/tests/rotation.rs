use cube_core::{
    ALL_MOVES, Color, CubeModel, CubeState, Face, Move, MoveSequence, Turns, Violation,
};
use itertools::Itertools;
use log::info;

fn scrambled(seed: u64) -> CubeModel {
    let mut model = CubeModel::new();
    model.scramble(&mut fastrand::Rng::with_seed(seed), 25);
    model
}

fn sorted_stickers(state: &CubeState) -> Vec<Color> {
    state.stickers().sorted().collect()
}

#[test_log::test]
fn four_quarter_turns_are_identity() {
    for seed in 0..10 {
        let start = scrambled(seed);
        for face in Face::ALL {
            for turns in [1, -1] {
                let mut model = start.clone();
                for _ in 0..4 {
                    model.rotate(face, turns).unwrap();
                }
                assert_eq!(model.state(), start.state(), "{face} {turns}");
            }
            let mut model = start.clone();
            model.rotate(face, 2).unwrap();
            model.rotate(face, 2).unwrap();
            assert_eq!(model.state(), start.state(), "{face}2");
        }
    }
}

#[test_log::test]
fn counter_clockwise_undoes_clockwise() {
    for seed in 0..10 {
        let start = scrambled(seed);
        for face in Face::ALL {
            let mut model = start.clone();
            model.rotate(face, 1).unwrap();
            assert_ne!(model.state(), start.state());
            model.rotate(face, -1).unwrap();
            assert_eq!(model.state(), start.state(), "{face}");
        }
    }
}

#[test_log::test]
fn half_turn_is_two_quarter_turns() {
    for seed in 0..10 {
        let start = scrambled(seed);
        for face in Face::ALL {
            let mut half = start.clone();
            half.rotate(face, 2).unwrap();
            let mut quarters = start.clone();
            quarters.rotate(face, 1).unwrap();
            quarters.rotate(face, 1).unwrap();
            assert_eq!(half.state(), quarters.state(), "{face}");
        }
    }
}

#[test_log::test]
fn rotation_conserves_colors() {
    let start = scrambled(3);
    let expected = sorted_stickers(start.state());
    for mv in ALL_MOVES {
        let mut model = start.clone();
        model.apply(mv);
        assert_eq!(sorted_stickers(model.state()), expected, "{mv}");
    }
}

#[test_log::test]
fn solved_cube_validates() {
    let model = CubeModel::new();
    assert!(model.is_solved());
    assert!(model.validate().is_valid());
}

#[test_log::test]
fn every_single_move_unsolves() {
    for face in Face::ALL {
        for turns in [1, -1, 2] {
            let mut model = CubeModel::new();
            model.reset();
            assert!(model.is_solved());
            model.rotate(face, turns).unwrap();
            assert!(!model.is_solved(), "{face} {turns}");
            assert!(model.validate().is_valid(), "{face} {turns}");
        }
    }
}

#[test_log::test]
fn front_quarter_turn_moves_adjacent_strips() {
    let mut model = CubeModel::new();
    model.rotate(Face::F, 1).unwrap();
    let state = model.state();

    assert_eq!(state[Face::F], [Color::Green; 9]);
    // Up's row against Front takes Left's column against Front, and so on
    // around the face.
    for position in [6, 7, 8] {
        assert_eq!(state[Face::U][position], Color::Orange);
    }
    for position in [0, 3, 6] {
        assert_eq!(state[Face::R][position], Color::White);
    }
    for position in [0, 1, 2] {
        assert_eq!(state[Face::D][position], Color::Red);
    }
    for position in [2, 5, 8] {
        assert_eq!(state[Face::L][position], Color::Yellow);
    }
    // Everything else is untouched.
    for position in [0, 1, 2, 3, 4, 5] {
        assert_eq!(state[Face::U][position], Color::White);
    }
    assert_eq!(state[Face::B], [Color::Blue; 9]);

    assert!(model.validate().is_valid());
    assert_eq!(
        state.to_string().lines().collect_vec(),
        [
            "      W W W",
            "      W W W",
            "      O O O",
            "O O Y G G G W R R B B B",
            "O O Y G G G W R R B B B",
            "O O Y G G G W R R B B B",
            "      R R R",
            "      Y Y Y",
            "      Y Y Y",
        ]
    );
}

#[test_log::test]
fn each_quarter_turn_matches_known_facelets() {
    let expected = [
        (
            "U",
            "WWWWWWWWWBBBRRRRRRRRRGGGGGGYYYYYYYYYGGGOOOOOOOOOBBBBBB",
        ),
        (
            "R",
            "WWGWWGWWGRRRRRRRRRGGYGGYGGYYYBYYBYYBOOOOOOOOOWBBWBBWBB",
        ),
        (
            "L",
            "BWWBWWBWWRRRRRRRRRWGGWGGWGGGYYGYYGYYOOOOOOOOOBBYBBYBBY",
        ),
        (
            "D",
            "WWWWWWWWWRRRRRRGGGGGGGGGOOOYYYYYYYYYOOOOOOBBBBBBBBBRRR",
        ),
        (
            "B",
            "RRRWWWWWWRRYRRYRRYGGGGGGGGGYYYYYYOOOWOOWOOWOOBBBBBBBBB",
        ),
        (
            "F",
            "WWWWWWOOOWRRWRRWRRGGGGGGGGGRRRYYYYYYOOYOOYOOYBBBBBBBBB",
        ),
    ];
    for (mv, facelets) in expected {
        let mut model = CubeModel::new();
        model.apply(mv.parse::<Move>().unwrap());
        assert_eq!(model.state().to_facelets(), facelets, "{mv}");
    }
}

#[test_log::test]
fn duplicated_center_is_reported_once() {
    let mut model = CubeModel::new();
    model.set_sticker(Face::U, 4, Color::Green).unwrap();
    let report = model.validate();
    let center_violations = report
        .violations
        .iter()
        .filter(|v| matches!(v, Violation::DuplicateCenters(_)))
        .count();
    assert_eq!(center_violations, 1);
    assert_eq!(
        report.violations,
        vec![
            Violation::DuplicateCenters(vec![Color::Green]),
            Violation::ColorCount {
                color: Color::White,
                count: 8
            },
            Violation::ColorCount {
                color: Color::Green,
                count: 10
            },
        ]
    );
}

#[test_log::test]
fn long_random_sequences_invert() {
    let mut rng = fastrand::Rng::with_seed(0xC0BE);
    for length in [1, 10, 100, 1000] {
        let mut model = scrambled(length as u64);
        let start = model.state().clone();
        let moves: MoveSequence = (0..length)
            .map(|_| ALL_MOVES[rng.usize(..ALL_MOVES.len())])
            .collect();
        model.apply_sequence(&moves);
        assert!(model.validate().is_valid());
        model.apply_sequence(&moves.inverse());
        assert_eq!(model.state(), &start, "{length}");
        info!("Inverted a sequence of {length} moves");
    }
}

#[test_log::test]
fn undo_unwinds_a_long_history() {
    let mut model = CubeModel::new();
    let scramble = model.scramble(&mut fastrand::Rng::with_seed(99), 1000);
    assert_eq!(model.history().len(), scramble.len());
    while model.undo().is_some() {}
    assert!(model.is_solved());
}

#[test_log::test]
fn scrambles_always_validate() {
    for seed in 0..50 {
        let model = scrambled(seed);
        let report = model.validate();
        assert!(report.is_valid(), "seed {seed}: {report}");
    }
}

#[test_log::test]
fn sexy_move_has_order_six() {
    let sexy: MoveSequence = "R U R' U'".parse().unwrap();
    let mut model = CubeModel::new();
    for i in 1..=6 {
        model.apply_sequence(&sexy);
        assert_eq!(model.is_solved(), i == 6, "{i}");
    }
}

#[test_log::test]
fn r_u_has_order_105() {
    let mut model = CubeModel::new();
    let r = Move::new(Face::R, Turns::Clockwise);
    let u = Move::new(Face::U, Turns::Clockwise);
    for i in 1..=105 {
        model.apply(r);
        model.apply(u);
        assert_eq!(model.is_solved(), i == 105, "{i}");
    }
}

#[test_log::test]
fn opposite_faces_commute() {
    let start = scrambled(11);
    for face in [Face::U, Face::R, Face::F] {
        let mut a = start.clone();
        a.rotate(face, 1).unwrap();
        a.rotate(face.opposite(), 1).unwrap();
        let mut b = start.clone();
        b.rotate(face.opposite(), 1).unwrap();
        b.rotate(face, 1).unwrap();
        assert_eq!(a.state(), b.state(), "{face}");
    }
}

use cubemath::prelude::*;
use itertools::Itertools;
use proptest::prelude::*;

use crate::*;

fn move_strategy() -> impl Strategy<Value = Move> {
    (
        prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)],
        prop_oneof![
            Just(LayerSet::single(-1)),
            Just(LayerSet::single(0)),
            Just(LayerSet::single(1)),
            Just(LayerSet::wide(Sign::Pos)),
            Just(LayerSet::ALL),
        ],
        prop_oneof![Just(Sign::Neg), Just(Sign::Pos)],
    )
        .prop_map(|(axis, layers, direction)| Move::new(axis, layers, direction))
}

proptest! {
    #[test]
    fn proptest_colors_are_conserved(moves in prop::collection::vec(move_strategy(), 0..12)) {
        let mut sim = CubeSimulation::default();
        sim.enqueue_all(moves.iter().copied());
        sim.catch_up();
        let facelets = sim.facelets();
        prop_assert!(!facelets.contains('?'));
        prop_assert_eq!(
            facelets.chars().sorted().collect::<String>(),
            SOLVED_FACELETS.chars().sorted().collect::<String>(),
        );
        // Centers never leave their faces relative to each other.
        let centers = [4, 13, 22, 31, 40, 49].map(|i| facelets.as_bytes()[i]);
        prop_assert!(centers.iter().all_unique());
    }

    #[test]
    fn proptest_inverse_sequence_solves(moves in prop::collection::vec(move_strategy(), 0..12)) {
        let mut sim = CubeSimulation::default();
        sim.enqueue_all(moves.iter().copied());
        sim.enqueue_all(moves.iter().rev().map(|m| m.rev()));
        sim.catch_up();
        prop_assert_eq!(sim.facelets(), SOLVED_FACELETS);
    }
}

//! Formal verification of invariants using the Kani model checker.
//!
//! These proof harnesses verify engine guarantees for ALL possible
//! inputs within the stated bounds.

#[cfg(kani)]
mod proofs {
    use crate::engine::GameEngine;
    use crate::invariants::{EngineInvariants, InvariantSet};
    use crate::position::Position;
    use crate::rules::check_winner;
    use crate::types::{Board, Square};

    /// Any sequence of commands, legal or not, preserves the
    /// invariant set.
    ///
    /// Indices range past the board edge so the out-of-range no-op
    /// path is covered alongside accepted moves.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_commands_preserve_invariants() {
        let mut game = GameEngine::new();

        for _ in 0..4 {
            let index: usize = kani::any();
            kani::assume(index <= 16);
            let _ = game.make_move(index);
        }

        assert!(
            EngineInvariants::check_all(&game).is_ok(),
            "invariant set violated by command sequence"
        );
    }

    /// A move onto an occupied cell is rejected and changes nothing
    /// observable.
    #[kani::proof]
    fn verify_occupied_cell_rejection_is_noop() {
        let pos: Position = kani::any();
        let mut game = GameEngine::new();

        assert!(game.make_move(pos.index()));
        let before = game.snapshot();

        assert!(!game.make_move(pos.index()));
        assert!(game.snapshot() == before, "rejected move mutated state");
    }

    /// No false win: fewer than three marks can never produce a
    /// winner, whatever their arrangement.
    #[kani::proof]
    fn verify_no_winner_under_three_marks() {
        let board: Board = kani::any();
        let occupied = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        kani::assume(occupied < 3);

        assert!(check_winner(&board).is_none());
    }
}

//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Board, Square};

/// Invariant: board cells are monotonic (never overwritten).
///
/// Once a cell transitions from Empty to Occupied it never changes
/// until reset. Verified by replaying the move history against a
/// fresh board and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

//! Outcome consistency invariant: the stored outcome matches the board.

use super::Invariant;
use crate::engine::GameEngine;
use crate::rules;
use crate::types::Outcome;

/// Invariant: the recorded outcome agrees with a fresh rules
/// evaluation of the board.
///
/// Exactly one of {outcome absent, outcome set} holds at any time: a
/// board with a completed line must carry `Win` for that player, a
/// full board without a line must carry `Draw`, and any other board
/// must carry no outcome at all.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameEngine> for OutcomeConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        match rules::check_winner(game.board()) {
            Some(winner) => game.outcome() == Some(Outcome::Win(winner)),
            None if rules::is_full(game.board()) => game.outcome() == Some(Outcome::Draw),
            None => game.outcome().is_none(),
        }
    }

    fn description() -> &'static str {
        "Recorded outcome matches the rules evaluation of the board"
    }
}

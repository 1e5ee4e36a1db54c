//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Player;

/// Invariant: players alternate turns.
///
/// The move history must read X, O, X, O, ... starting with X. While
/// the game is in progress the current player is the one the
/// alternation predicts next; once an outcome is set it stays at the
/// player who made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        match (game.outcome(), history.last()) {
            // Terminal state keeps the final mover as current player.
            (Some(_), Some(last)) => game.current_player() == last.player,
            // An outcome with no moves is unreachable.
            (Some(_), None) => false,
            (None, _) => {
                let expected_next = if history.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                game.current_player() == expected_next
            }
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

//! Observable state snapshots for presentation layers.

use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};

/// Immutable view of the engine state after a command.
///
/// Consumers either re-read a snapshot after each command or receive
/// them through [`GameEngine::subscribe`](crate::GameEngine::subscribe).
/// The revision is a strictly increasing change stamp: two snapshots
/// with the same revision describe the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board cells in row-major order, `None` for empty.
    pub cells: [Option<Player>; 9],
    /// Player whose turn it is. Once the game is over this stays at
    /// the player who made the final move.
    pub to_move: Player,
    /// Game outcome, absent while in progress.
    pub outcome: Option<Outcome>,
    /// Change stamp, bumped on every accepted command.
    pub revision: u64,
}

impl Snapshot {
    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self.outcome {
            Some(Outcome::Win(player)) => format!("Player {player} wins!"),
            Some(Outcome::Draw) => "It's a draw!".to_string(),
            None => format!("Player {}'s turn", self.to_move),
        }
    }
}

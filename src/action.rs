//! First-class move records and rejection reasons.
//!
//! Moves are domain events, not side effects. The engine appends one
//! to its history for every accepted command, which lets the
//! invariant set reconstruct the board independently.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move command was not applied.
///
/// The command path never surfaces these as errors: an illegal move is
/// a silent no-op, matching forgiving UI command semantics where
/// double-tapping a filled cell must be harmless. Rejections are
/// reported through debug logging and are available to contract-level
/// tests.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not address a board cell.
    #[display("Index {} is outside the board", _0)]
    OutOfRange(usize),

    /// The cell at the position is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

//! Contract-based validation for move commands.
//!
//! Contracts formalize Hoare-style reasoning over the engine:
//! preconditions decide whether a command is applied at all, and
//! postconditions verify the transition kept the invariant set
//! intact. The engine checks preconditions on every command and
//! postconditions in debug builds.

use crate::action::MoveError;
use crate::engine::GameEngine;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;

/// Preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after the action has been applied.
    fn post(state: &S) -> Result<(), MoveError>;
}

/// Precondition: the game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects commands once an outcome is set.
    pub fn check(game: &GameEngine) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsFree;

impl CellIsFree {
    /// Rejects moves onto a marked cell.
    pub fn check(pos: Position, game: &GameEngine) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is in progress
/// and the cell is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(pos: Position, game: &GameEngine) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellIsFree::check(pos, game)?;
        Ok(())
    }
}

/// Contract for move commands.
///
/// Preconditions: game in progress, cell free. Postcondition: the
/// full invariant set holds on the resulting state.
pub struct MoveContract;

impl Contract<GameEngine, Position> for MoveContract {
    fn pre(game: &GameEngine, action: &Position) -> Result<(), MoveError> {
        LegalMove::check(*action, game)
    }

    fn post(game: &GameEngine) -> Result<(), MoveError> {
        EngineInvariants::check_all(game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}

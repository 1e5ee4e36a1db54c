//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so related invariants
/// compose into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod monotonic_board;
pub mod outcome_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::engine::GameEngine;
    use crate::position::Position;
    use crate::types::{Board, Player, Square};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        let game = GameEngine::new();
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = GameEngine::replay(&[0, 4, 2]);
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));

        // O on the board with no history at all
        let game = GameEngine::from_parts(board, Vec::new(), Player::X, None);

        let violations = EngineInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameEngine::replay(&[4, 0]);

        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_violation_reports_description() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        let history = vec![
            Move::new(Player::X, Position::Center),
            Move::new(Player::X, Position::TopLeft),
        ];

        let game = GameEngine::from_parts(board, history, Player::O, None);
        let violations = EngineInvariants::check_all(&game).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == AlternatingTurnInvariant::description())
        );
    }
}

//! Tic-tac-toe rule engine.
//!
//! Tracks board state, enforces turn order, validates moves, and
//! detects terminal outcomes (win/draw) for a two-player 3x3 match.
//! The engine owns all state; a presentation layer renders queried
//! state and forwards user gestures as commands.
//!
//! Commands are forgiving: an out-of-range index, a tap on an
//! occupied cell, or a move after the game has ended is a silent
//! no-op. Consumers observe changes by re-reading a [`Snapshot`]
//! after each command or through [`GameEngine::subscribe`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Player};
//!
//! let mut game = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.make_move(index);
//! }
//! assert_eq!(game.outcome(), Some(Outcome::Win(Player::X)));
//!
//! game.reset();
//! assert!(game.board().cells().iter().all(Option::is_none));
//! assert_eq!(game.current_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod engine;
mod invariants;
mod kani_support;
mod observe;
mod position;
mod rules;
mod snapshot;
mod types;

// Crate-level exports - commands and queries
pub use engine::GameEngine;
pub use snapshot::Snapshot;

// Crate-level exports - domain types
pub use action::{Move, MoveError};
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};

// Crate-level exports - rules
pub use rules::{check_winner, is_full};

// Crate-level exports - contracts and invariants
pub use contracts::{CellIsFree, Contract, GameNotOver, LegalMove, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, OutcomeConsistentInvariant,
};

//! The game engine: sole authority over game state and rules.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::observe::Watchers;
use crate::position::Position;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::{Board, Outcome, Player, Square};
use std::sync::mpsc::Receiver;
use tracing::{debug, instrument, warn};

/// Rule engine for a two-player tic-tac-toe match.
///
/// Owns the board, the turn order, and the outcome. The presentation
/// layer issues commands ([`make_move`](Self::make_move),
/// [`reset`](Self::reset)) and reads state back through the query
/// surface or a [`Snapshot`] subscription.
///
/// Commands never fail: an illegal move is a silent no-op. This keeps
/// presentation code free of error branches for routine invalid
/// gestures like tapping a filled cell.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    outcome: Option<Outcome>,
    history: Vec<Move>,
    revision: u64,
    watchers: Watchers,
}

impl GameEngine {
    /// Creates a new engine: empty board, X to move, no outcome.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: None,
            history: Vec::new(),
            revision: 0,
            watchers: Watchers::default(),
        }
    }

    /// Attempts to mark the cell at `index` (0-8) for the current
    /// player, then evaluates termination.
    ///
    /// Returns whether the move was accepted. An out-of-range index,
    /// an occupied cell, or a finished game leaves the state untouched
    /// and returns `false`; the rejection reason goes to debug
    /// logging only.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, index: usize) -> bool {
        let pos = match self.validate(index) {
            Ok(pos) => pos,
            Err(rejection) => {
                debug!(index, %rejection, "move ignored");
                return false;
            }
        };

        let mover = self.current_player;
        self.board.set(pos, Square::Occupied(mover));
        self.history.push(Move::new(mover, pos));

        if let Some(winner) = rules::check_winner(&self.board) {
            self.outcome = Some(Outcome::Win(winner));
        } else if rules::is_full(&self.board) {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.current_player = mover.opponent();
        }

        debug_assert!(
            MoveContract::post(self).is_ok(),
            "accepted move must preserve game invariants"
        );

        self.revision += 1;
        self.watchers.publish(self.snapshot());
        debug!(index, revision = self.revision, outcome = ?self.outcome, "move accepted");
        true
    }

    /// Restores the initial state unconditionally: board cleared, X to
    /// move, no outcome, empty history.
    ///
    /// Always succeeds, from any state. Subscribers survive a reset;
    /// the revision keeps increasing so consumers can tell the state
    /// changed.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.outcome = None;
        self.history.clear();
        self.revision += 1;
        self.watchers.publish(self.snapshot());
        debug!(revision = self.revision, "game reset");
    }

    /// Builds an engine by applying a sequence of move indices.
    ///
    /// Entries the engine rejects are logged and skipped, preserving
    /// the forgiving command semantics.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut engine = Self::new();
        for &index in indices {
            if !engine.make_move(index) {
                warn!(index, "replay entry ignored");
            }
        }
        engine
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Meaningful while the game is in progress; after a terminal move
    /// it reports the player who ended the game.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game outcome, absent while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the moves accepted since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions still open for a move.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Returns the change stamp, bumped on every accepted command.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns a snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.board.cells(),
            to_move: self.current_player,
            outcome: self.outcome,
            revision: self.revision,
        }
    }

    /// Subscribes an observer to state changes.
    ///
    /// The receiver is seeded with the current snapshot and then gets
    /// one snapshot per accepted command, in order. Dropping the
    /// receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<Snapshot> {
        let current = self.snapshot();
        self.watchers.subscribe(current)
    }

    fn validate(&self, index: usize) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        MoveContract::pre(self, &pos)?;
        Ok(pos)
    }

    /// Assembles an engine from raw parts, bypassing the command path.
    ///
    /// Test and verification hook: lets invariant checks see states
    /// the commands could never produce.
    #[cfg(any(test, kani))]
    pub(crate) fn from_parts(
        board: Board,
        history: Vec<Move>,
        current_player: Player,
        outcome: Option<Outcome>,
    ) -> Self {
        let revision = history.len() as u64;
        Self {
            board,
            current_player,
            outcome,
            history,
            revision,
            watchers: Watchers::default(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

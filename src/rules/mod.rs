//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated
//! from board storage so the engine, the invariant set, and tests can
//! all evaluate positions without touching engine internals.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

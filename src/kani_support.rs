//! Kani arbitrary implementations for engine types.
//!
//! These let the model checker explore all possible values of the
//! domain types during verification.

#[cfg(kani)]
use crate::position::Position;
#[cfg(kani)]
use crate::types::{Board, Player, Square};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        match Position::from_index(index) {
            Some(pos) => pos,
            None => unreachable!(),
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let squares: [Square; 9] = kani::any();
        Board::from_squares(squares)
    }
}

use super::{BoardAccess, SquareState};
use crate::*;

/// True iff the square holds a mine and carries a flag.
pub fn is_correctly_flagged<B: BoardAccess + ?Sized>(board: &B, coords: Coord2) -> bool {
    board.is_mine(coords) && board.square_state(coords) == SquareState::Flagged
}

/// A round is won once every mine is flagged and every other square is revealed.
pub fn check_win_condition<B: BoardAccess + ?Sized>(board: &B) -> bool {
    let (rows, cols) = board.size();
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .all(|coords| {
            if board.is_mine(coords) {
                is_correctly_flagged(board, coords)
            } else {
                board.square_state(coords) == SquareState::Revealed
            }
        })
}

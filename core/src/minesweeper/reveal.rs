use std::collections::VecDeque;

use super::{BoardAccess, SquareState};
use crate::*;

/// Reveals `coords` and, when it touches no mines, floods outward.
///
/// The flood continues through zero-count squares and stops at numbered
/// squares, which are revealed as the border. Mines and flagged squares are
/// never entered; question marks are. Returns how many squares changed to
/// [`SquareState::Revealed`]. Invalid or already revealed coordinates are a
/// no-op.
pub fn reveal_square<B: BoardAccess + ?Sized>(board: &mut B, coords: Coord2) -> usize {
    if !board.is_valid_cell(coords) || board.square_state(coords) == SquareState::Revealed {
        return 0;
    }

    let mut revealed = 0;
    let mut to_visit = VecDeque::from([coords]);

    while let Some(visit_coords) = to_visit.pop_front() {
        // a square can be queued by several zero neighbors
        if board.square_state(visit_coords) == SquareState::Revealed {
            continue;
        }

        board.set_square_state(visit_coords, SquareState::Revealed);
        revealed += 1;

        let adjacent = board.adjacent_mines(visit_coords);
        log::trace!("Revealed {:?}, adjacent mines: {}", visit_coords, adjacent);

        if adjacent == 0 {
            let next: Vec<_> = board
                .neighbors(visit_coords)
                .filter(|&pos| !board.is_mine(pos))
                .filter(|&pos| {
                    matches!(
                        board.square_state(pos),
                        SquareState::Hidden | SquareState::QuestionMark
                    )
                })
                .collect();
            to_visit.extend(next);
        }
    }

    revealed
}

/// Every mine on the board, row-major. Used to show the field after a loss.
pub fn mine_locations<B: BoardAccess + ?Sized>(board: &B) -> Vec<Coord2> {
    let (rows, cols) = board.size();
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter(|&coords| board.is_mine(coords))
        .collect()
}

//! Non-searching opponents for duels: they look at the current position only.

mod random;
mod simple;

pub use random::RandomAggressiveEngine;
pub use simple::SimpleEngine;

use cozy_chess::{Board, Color};
use evaluation::piece_value;
use utils::{is_capture, ChessMove, GameState, MoveList};

use crate::SearchError;

fn current_board(board: Option<&Board>) -> Result<&Board, SearchError> {
    board.ok_or(SearchError::StateRetrievalFailure("no position set"))
}

/// Legal moves of `board`, or `None` when the game is already over.
fn legal_moves(board: &Board, history: &[u64]) -> Option<MoveList> {
    GameState::with_history(board.clone(), history).legal_moves()
}

/// Splits moves into captures and quiet moves, each sorted front to back.
fn split_by_capture(board: &Board, moves: &[ChessMove]) -> (Vec<ChessMove>, Vec<ChessMove>) {
    let (mut captures, mut quiets): (Vec<ChessMove>, Vec<ChessMove>) =
        moves.iter().partition(|mv| is_capture(board, mv));

    let side = board.side_to_move();
    captures.sort_by_key(|mv| front_first_key(side, mv));
    quiets.sort_by_key(|mv| front_first_key(side, mv));
    (captures, quiets)
}

/// Frontmost rank for the mover, then the leftmost file, then the longest
/// move, then the strongest promotion.
fn front_first_key(side: Color, mv: &ChessMove) -> (i32, i32, i32, i32) {
    let rank = mv.from.rank() as i32;
    let file = mv.from.file() as i32;
    let advance = match side {
        Color::White => -rank,
        Color::Black => rank,
    };
    let distance = (mv.to.rank() as i32 - rank).abs() + (mv.to.file() as i32 - file).abs();
    let promotion = mv.promotion().map_or(0, piece_value);

    (advance, file, -distance, -promotion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_orders_front_to_back() {
        let board: Board = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1".parse().unwrap();
        let moves = legal_moves(&board, &[]).unwrap();
        let (captures, quiets) = split_by_capture(&board, &moves);

        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to_string(), "d2d5");
        // The rook on d2 is ahead of the king on e1; d2h2 is its longest quiet move.
        assert_eq!(quiets[0].to_string(), "d2h2");
        assert_eq!(captures.len() + quiets.len(), moves.len());
    }

    #[test]
    fn test_missing_position() {
        assert!(matches!(
            current_board(None),
            Err(SearchError::StateRetrievalFailure(_))
        ));
    }
}

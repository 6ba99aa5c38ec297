use cozy_chess::{Board, Color, Piece};

use crate::mop_up::mop_up;
use crate::piece_values::piece_value;
use crate::pst::pst_value;

/// Static score of `board` from the side to move's point of view.
///
/// Material, piece-square bonuses and the bare-king endgame term, White minus
/// Black, negated when Black is to move.
pub fn evaluate(board: &Board) -> i32 {
    let white = side_score(board, Color::White);
    let black = side_score(board, Color::Black);
    let score = white - black;

    match board.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

#[inline(always)]
fn side_score(board: &Board, color: Color) -> i32 {
    material(board, color) + positional(board, color) + mop_up(board, color)
}

pub fn material(board: &Board, color: Color) -> i32 {
    Piece::ALL
        .iter()
        .map(|&piece| piece_value(piece) * board.colored_pieces(color, piece).len() as i32)
        .sum()
}

pub fn positional(board: &Board, color: Color) -> i32 {
    let mut total = 0;
    for piece in Piece::ALL {
        for square in board.colored_pieces(color, piece) {
            total += pst_value(piece, color, square);
        }
    }
    total
}

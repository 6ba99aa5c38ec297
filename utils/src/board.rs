use cozy_chess::{Board, Move};

use crate::moves::{ChessMove, MoveKind};

/// Check if a move takes an enemy piece, including en passant.
/// Castling never captures even though cozy-chess encodes it as "king takes rook".
#[inline(always)]
pub fn is_capture(board: &Board, mv: &ChessMove) -> bool {
    match mv.kind {
        MoveKind::EnPassant { .. } => true,
        MoveKind::Castling { .. } => false,
        _ => board.colors(!board.side_to_move()).has(mv.to),
    }
}

/// Make a move and return a new board.
#[inline(always)]
pub fn make_move(board: &Board, mv: Move) -> Board {
    let mut new_board = board.clone();
    new_board.play_unchecked(mv);
    new_board
}

/// Check if there are any legal moves in the position.
#[inline(always)]
pub fn has_legal_moves(board: &Board) -> bool {
    board.generate_moves(|_| true)
}

/// Check if the side to move is in check.
#[inline(always)]
pub fn has_check(board: &Board) -> bool {
    !board.checkers().is_empty()
}

/// Canonical transposition key: the FEN placement field followed by the side to move.
///
/// Castling and en-passant rights are not part of the key, so two positions
/// differing only in those rights share an entry.
pub fn fingerprint(board: &Board) -> String {
    let fen = board.to_string();
    let mut fields = fen.split_whitespace();
    let placement = fields.next().unwrap_or_default();
    let side = fields.next().unwrap_or_default();

    let mut key = String::with_capacity(placement.len() + 2);
    key.push_str(placement);
    key.push(' ');
    key.push_str(side);
    key
}

use arrayvec::ArrayVec;
use cozy_chess::{Board, Piece};
use evaluation::{piece_value, pst_value};
use utils::{is_capture, ChessMove, MoveKind, MAX_MOVES};

/// Captures always sort ahead of everything else.
pub const CAPTURE_BIAS: i32 = 8_000_000;
/// Quiet promotions sort after captures but ahead of other quiet moves.
pub const PROMOTION_BIAS: i32 = 6_000_000;

/// Sorts `moves` best-first. Ordering only affects how much gets pruned, never the result.
pub fn order_moves(board: &Board, moves: &mut [ChessMove]) {
    let mut scored: ArrayVec<(i32, ChessMove), MAX_MOVES> = moves
        .iter()
        .map(|&mv| (score_move(board, &mv), mv))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    for (slot, (_, mv)) in moves.iter_mut().zip(scored) {
        *slot = mv;
    }
}

/// Heuristic priority of a move.
///
/// - capture: `CAPTURE_BIAS + victim - attacker` (MVV-LVA)
/// - quiet promotion: `PROMOTION_BIAS`
/// - knights, bishops, rooks and queens add the piece-square gain of the move
pub fn score_move(board: &Board, mv: &ChessMove) -> i32 {
    let mover = board.side_to_move();
    let piece = board
        .piece_on(mv.from)
        .unwrap_or_else(|| panic!("move {} starts on an empty square in {}", mv, board));

    let mut score = 0;
    let capture = is_capture(board, mv);
    if capture {
        let victim = match mv.kind {
            MoveKind::EnPassant { .. } => Piece::Pawn,
            _ => board.piece_on(mv.to).unwrap_or(Piece::Pawn),
        };
        score += CAPTURE_BIAS + piece_value(victim) - piece_value(piece);
    }

    match piece {
        Piece::Pawn => {
            if mv.promotion().is_some() && !capture {
                score += PROMOTION_BIAS;
            }
        }
        Piece::King => {}
        _ => score += pst_value(piece, mover, mv.to) - pst_value(piece, mover, mv.from),
    }

    score
}

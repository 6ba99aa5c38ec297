use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, Color, Piece, Square,
};

const REGION_WEIGHT: i32 = 5;
const EDGE_WEIGHT: i32 = 10;
const PROXIMITY_WEIGHT: i32 = 4;

/// Endgame bonus for `strong` against a bare king.
///
/// Applies only when the opponent has nothing but its king and `strong` still
/// has a rook or queen. Rewards shrinking the area the bare king can walk to,
/// pushing it towards the edge and bringing the own king closer, which gives
/// a shallow search a gradient towards mate.
///
/// <https://www.chessprogramming.org/Mop-up_Evaluation>
pub fn mop_up(board: &Board, strong: Color) -> i32 {
    let weak = !strong;
    if board.colors(weak) != board.colored_pieces(weak, Piece::King) {
        return 0;
    }
    let heavy =
        board.colored_pieces(strong, Piece::Rook) | board.colored_pieces(strong, Piece::Queen);
    if heavy.is_empty() {
        return 0;
    }

    let weak_king = board.king(weak);
    let region = king_region(board, strong, weak_king);

    REGION_WEIGHT * (64 - region.len() as i32)
        + EDGE_WEIGHT * center_distance(weak_king)
        + PROXIMITY_WEIGHT * (14 - manhattan_distance(weak_king, board.king(strong)))
}

/// Squares reachable by king steps from `king` without crossing a square `attacker` covers.
fn king_region(board: &Board, attacker: Color, king: Square) -> BitBoard {
    // The king does not shield the squares behind it.
    let blockers = board.occupied() ^ king.bitboard();
    let safe = !attacks(board, attacker, blockers);

    let mut region = king.bitboard();
    loop {
        let mut grown = region;
        for square in region {
            grown |= get_king_moves(square) & safe;
        }
        if grown == region {
            return region;
        }
        region = grown;
    }
}

fn attacks(board: &Board, color: Color, blockers: BitBoard) -> BitBoard {
    let mut attacked = BitBoard::EMPTY;
    for square in board.colors(color) {
        attacked |= match board.piece_on(square) {
            Some(Piece::Pawn) => get_pawn_attacks(square, color),
            Some(Piece::Knight) => get_knight_moves(square),
            Some(Piece::Bishop) => get_bishop_moves(square, blockers),
            Some(Piece::Rook) => get_rook_moves(square, blockers),
            Some(Piece::Queen) => {
                get_bishop_moves(square, blockers) | get_rook_moves(square, blockers)
            }
            Some(Piece::King) => get_king_moves(square),
            None => BitBoard::EMPTY,
        };
    }
    attacked
}

/// Manhattan distance to the nearest of the four center squares, 0..=6.
#[inline(always)]
fn center_distance(square: Square) -> i32 {
    let file = square.file() as i32;
    let rank = square.rank() as i32;
    (3 - file).max(file - 4) + (3 - rank).max(rank - 4)
}

#[inline(always)]
fn manhattan_distance(a: Square, b: Square) -> i32 {
    (a.file() as i32 - b.file() as i32).abs() + (a.rank() as i32 - b.rank() as i32).abs()
}

use cozy_chess::{Color, Piece, Square};

/// Positional bonus for `piece` of `color` standing on `square`.
///
/// Tables are laid out from White's side; Black reads them rank-mirrored.
#[inline(always)]
pub fn pst_value(piece: Piece, color: Color, square: Square) -> i32 {
    let index = match color {
        Color::White => square as usize,
        Color::Black => square as usize ^ 56,
    };
    table(piece)[index]
}

#[inline(always)]
fn table(piece: Piece) -> &'static [i32; 64] {
    match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King => &KING_PST,
    }
}

// - Rewards central pawns and advancing toward promotion
pub const PAWN_PST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 1: a1..h1
    5, 10, 10, -20, -20, 10, 10, 5, // RANK 2
    5, -5, -10, 0, 0, -10, -5, 5, // RANK 3
    0, 0, 0, 20, 20, 0, 0, 0, // RANK 4
    5, 5, 10, 25, 25, 10, 5, 5, // RANK 5
    10, 10, 20, 30, 30, 20, 10, 10, // RANK 6
    50, 50, 50, 50, 50, 50, 50, 50, // RANK 7
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 8
];

// - Knights on the rim are dim
pub const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 1
    -40, -20, 0, 5, 5, 0, -20, -40, // RANK 2
    -30, 5, 10, 15, 15, 10, 5, -30, // RANK 3
    -30, 0, 15, 20, 20, 15, 0, -30, // RANK 4
    -30, 5, 15, 20, 20, 15, 5, -30, // RANK 5
    -30, 0, 10, 15, 15, 10, 0, -30, // RANK 6
    -40, -20, 0, 0, 0, 0, -20, -40, // RANK 7
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 8
];

// - Long diagonals, avoid corners
pub const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 1
    -10, 5, 0, 0, 0, 0, 5, -10, // RANK 2
    -10, 10, 10, 10, 10, 10, 10, -10, // RANK 3
    -10, 0, 10, 10, 10, 10, 0, -10, // RANK 4
    -10, 5, 5, 10, 10, 5, 5, -10, // RANK 5
    -10, 0, 5, 10, 10, 5, 0, -10, // RANK 6
    -10, 0, 0, 0, 0, 0, 0, -10, // RANK 7
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 8
];

// - Seventh rank, central files on the back rank
pub const ROOK_PST: [i32; 64] = [
    0, 0, 0, 5, 5, 0, 0, 0, // RANK 1
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 2
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 3
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 4
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 5
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 6
    5, 10, 10, 10, 10, 10, 10, 5, // RANK 7
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 8
];

pub const QUEEN_PST: [i32; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20, // RANK 1
    -10, 0, 5, 0, 0, 0, 0, -10, // RANK 2
    -10, 5, 5, 5, 5, 5, 0, -10, // RANK 3
    0, 0, 5, 5, 5, 5, 0, -5, // RANK 4
    -5, 0, 5, 5, 5, 5, 0, -5, // RANK 5
    -10, 0, 5, 5, 5, 5, 0, -10, // RANK 6
    -10, 0, 0, 0, 0, 0, 0, -10, // RANK 7
    -20, -10, -10, -5, -5, -10, -10, -20, // RANK 8
];

// - Endgame king: centralize, keep off the edges
pub const KING_PST: [i32; 64] = [
    -50, -30, -30, -30, -30, -30, -30, -50, // RANK 1
    -30, -25, 0, 0, 0, 0, -25, -30, // RANK 2
    -25, -20, 20, 25, 25, 20, -20, -25, // RANK 3
    -20, -15, 30, 40, 40, 30, -15, -20, // RANK 4
    -15, -10, 35, 45, 45, 35, -10, -15, // RANK 5
    -10, -5, 20, 30, 30, 20, -5, -10, // RANK 6
    -5, 0, 5, 5, 5, 5, 0, -5, // RANK 7
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 8
];

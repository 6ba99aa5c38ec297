mod board;
mod game;
mod moves;

pub use board::{fingerprint, has_check, has_legal_moves, is_capture, make_move};
pub use game::{GameState, HalfMove, IllegalMoveError, MoveList, Outcome, MAX_MOVES};
pub use moves::{ChessMove, MoveKind};

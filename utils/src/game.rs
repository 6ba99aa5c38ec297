use arrayvec::ArrayVec;
use cozy_chess::{Board, Color, FenParseError};
use thiserror::Error;

use crate::board::{fingerprint, has_check, has_legal_moves};
use crate::moves::ChessMove;

/// Upper bound on legal moves in any reachable chess position.
pub const MAX_MOVES: usize = 218;

pub type MoveList = ArrayVec<ChessMove, MAX_MOVES>;

/// Why a game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move is mated.
    Checkmate,
    Stalemate,
    Repetition,
    FiftyMoves,
}

impl Outcome {
    #[inline(always)]
    pub fn is_draw(self) -> bool {
        !matches!(self, Outcome::Checkmate)
    }
}

/// An executed move plus what it did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfMove {
    pub mv: ChessMove,
    pub caused_check: bool,
    pub outcome: Option<Outcome>,
}

impl HalfMove {
    #[inline(always)]
    pub fn caused_checkmate(&self) -> bool {
        self.outcome == Some(Outcome::Checkmate)
    }

    #[inline(always)]
    pub fn caused_stalemate(&self) -> bool {
        self.outcome == Some(Outcome::Stalemate)
    }
}

#[derive(Debug, Error)]
#[error("illegal move {mv} in position {fen}")]
pub struct IllegalMoveError {
    pub mv: ChessMove,
    pub fen: String,
}

/// A game timeline that can be advanced and rewound.
///
/// Index 0 is the starting position; `head_index` is the position currently
/// on the board. Rewinding with `undo_to_index` drops everything after the
/// given index, so make/unmake must follow strict LIFO order.
#[derive(Debug, Clone)]
pub struct GameState {
    timeline: Vec<Board>,
    half_moves: Vec<HalfMove>,
    /// Hashes of positions played before `timeline[0]`, for repetition counting.
    prior_hashes: Vec<u64>,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self::with_history(board, &[])
    }

    pub fn with_history(board: Board, prior_hashes: &[u64]) -> Self {
        let mut timeline = Vec::with_capacity(128);
        timeline.push(board);
        Self {
            timeline,
            half_moves: Vec::with_capacity(128),
            prior_hashes: prior_hashes.to_vec(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        Ok(Self::new(fen.parse()?))
    }

    #[inline(always)]
    pub fn current(&self) -> &Board {
        // The timeline always holds the starting position.
        &self.timeline[self.timeline.len() - 1]
    }

    #[inline(always)]
    pub fn head_index(&self) -> usize {
        self.timeline.len() - 1
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.current().side_to_move()
    }

    #[inline(always)]
    pub fn fingerprint(&self) -> String {
        fingerprint(self.current())
    }

    pub fn half_moves(&self) -> &[HalfMove] {
        &self.half_moves
    }

    /// Metadata of the move that produced the current position, if any.
    #[inline(always)]
    pub fn last_half_move(&self) -> Option<&HalfMove> {
        self.half_moves.last()
    }

    /// Hashes of every position before the head, oldest first.
    pub fn history_hashes(&self) -> Vec<u64> {
        let played = &self.timeline[..self.head_index()];
        self.prior_hashes
            .iter()
            .copied()
            .chain(played.iter().map(Board::hash))
            .collect()
    }

    /// Legal moves of the current position, or `None` when the game is over.
    ///
    /// `None` covers checkmate, stalemate, threefold repetition and the
    /// fifty-move rule; `outcome` tells them apart.
    pub fn legal_moves(&self) -> Option<MoveList> {
        if self.outcome().is_some() {
            return None;
        }

        let board = self.current();
        let mut moves = MoveList::new();
        board.generate_moves(|batch| {
            for mv in batch {
                moves.push(ChessMove::from_cozy(board, mv));
            }
            false
        });
        Some(moves)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.half_moves.last() {
            Some(half_move) => half_move.outcome,
            None => self.detect_outcome(),
        }
    }

    pub fn execute_move(&mut self, mv: &ChessMove) -> Result<(), IllegalMoveError> {
        let mut board = self.current().clone();
        board.try_play(mv.to_cozy()).map_err(|_| IllegalMoveError {
            mv: *mv,
            fen: self.current().to_string(),
        })?;

        let caused_check = has_check(&board);
        self.timeline.push(board);
        let outcome = self.detect_outcome();
        self.half_moves.push(HalfMove {
            mv: *mv,
            caused_check,
            outcome,
        });
        Ok(())
    }

    /// Rewinds to an earlier index. Indices past the head are ignored.
    pub fn undo_to_index(&mut self, index: usize) {
        self.timeline.truncate(index + 1);
        self.half_moves.truncate(index);
    }

    fn detect_outcome(&self) -> Option<Outcome> {
        let board = self.current();
        if !has_legal_moves(board) {
            return Some(if has_check(board) {
                Outcome::Checkmate
            } else {
                Outcome::Stalemate
            });
        }
        if self.repetitions() >= 3 {
            return Some(Outcome::Repetition);
        }
        if board.halfmove_clock() >= 100 {
            return Some(Outcome::FiftyMoves);
        }
        None
    }

    fn repetitions(&self) -> usize {
        let hash = self.current().hash();
        let prior = self.prior_hashes.iter().filter(|&&h| h == hash).count();
        let played = self.timeline.iter().filter(|b| b.hash() == hash).count();
        prior + played
    }
}

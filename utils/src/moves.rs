use std::fmt;

use cozy_chess::util::parse_uci_move;
use cozy_chess::{Board, File, Move, Piece, Square};

/// What a move does beyond relocating a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    /// Pawn reaches the last rank and becomes the given piece.
    Promotion(Piece),
    /// Pawn capture onto the en-passant target; `captured` is where the taken pawn stood.
    EnPassant { captured: Square },
    /// King moves two files; `rook` is the square the rook starts on.
    Castling { rook: Square },
}

/// A move as the search sees it.
///
/// For castling `to` is the king's destination, unlike `cozy_chess::Move`
/// which encodes castling as the king capturing its own rook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl ChessMove {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Normal,
        }
    }

    /// Classifies a cozy-chess move generated for `board`.
    pub fn from_cozy(board: &Board, mv: Move) -> Self {
        if let Some(piece) = mv.promotion {
            return Self {
                from: mv.from,
                to: mv.to,
                kind: MoveKind::Promotion(piece),
            };
        }

        let mover = board.side_to_move();
        match board.piece_on(mv.from) {
            Some(Piece::King) if board.colors(mover).has(mv.to) => {
                let file = if (mv.to.file() as usize) > (mv.from.file() as usize) {
                    File::G
                } else {
                    File::C
                };
                Self {
                    from: mv.from,
                    to: Square::new(file, mv.from.rank()),
                    kind: MoveKind::Castling { rook: mv.to },
                }
            }
            Some(Piece::Pawn)
                if mv.from.file() != mv.to.file() && board.piece_on(mv.to).is_none() =>
            {
                Self {
                    from: mv.from,
                    to: mv.to,
                    kind: MoveKind::EnPassant {
                        captured: Square::new(mv.to.file(), mv.from.rank()),
                    },
                }
            }
            _ => Self::new(mv.from, mv.to),
        }
    }

    /// Parses standard UCI notation (`e1g1` for castling) against `board`.
    pub fn from_uci(board: &Board, text: &str) -> Option<Self> {
        let mv = parse_uci_move(board, text).ok()?;
        Some(Self::from_cozy(board, mv))
    }

    pub fn to_cozy(self) -> Move {
        match self.kind {
            MoveKind::Castling { rook } => Move {
                from: self.from,
                to: rook,
                promotion: None,
            },
            MoveKind::Promotion(piece) => Move {
                from: self.from,
                to: self.to,
                promotion: Some(piece),
            },
            MoveKind::Normal | MoveKind::EnPassant { .. } => Move {
                from: self.from,
                to: self.to,
                promotion: None,
            },
        }
    }

    #[inline(always)]
    pub fn promotion(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castling { .. })
    }
}

impl fmt::Display for ChessMove {
    /// UCI long algebraic notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion() {
            let suffix = match piece {
                Piece::Knight => 'n',
                Piece::Bishop => 'b',
                Piece::Rook => 'r',
                _ => 'q',
            };
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn test_castling_uses_king_destination() {
        let board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let cozy = Move {
            from: Square::E1,
            to: Square::H1,
            promotion: None,
        };
        let mv = ChessMove::from_cozy(&board, cozy);

        assert_eq!(mv.to, Square::G1);
        assert_eq!(mv.kind, MoveKind::Castling { rook: Square::H1 });
        assert_eq!(mv.to_cozy(), cozy);
        assert_eq!(mv.to_string(), "e1g1");
    }

    #[test]
    fn test_queenside_castling() {
        let board = board("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        let mv = ChessMove::from_uci(&board, "e8c8").unwrap();

        assert_eq!(mv.to, Square::C8);
        assert_eq!(mv.kind, MoveKind::Castling { rook: Square::A8 });
    }

    #[test]
    fn test_en_passant_records_captured_square() {
        let board = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let mv = ChessMove::from_uci(&board, "e5d6").unwrap();

        assert_eq!(mv.kind, MoveKind::EnPassant { captured: Square::D5 });
    }

    #[test]
    fn test_promotion_round_trips_through_uci() {
        let board = board("8/P3k3/8/8/8/8/8/4K3 w - - 0 1");
        let mv = ChessMove::from_uci(&board, "a7a8n").unwrap();

        assert_eq!(mv.promotion(), Some(Piece::Knight));
        assert_eq!(mv.to_string(), "a7a8n");
    }

    #[test]
    fn test_plain_capture_is_normal() {
        let board = board("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        let mv = ChessMove::from_uci(&board, "e4d5").unwrap();

        assert_eq!(mv.kind, MoveKind::Normal);
    }
}

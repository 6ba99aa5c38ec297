use utils::ChessMove;

/// `ChessMove` already prints castling as the king's destination, so no board is needed.
pub fn pv_to_uci(pv: &[ChessMove]) -> Vec<String> {
    pv.iter().map(ChessMove::to_string).collect()
}

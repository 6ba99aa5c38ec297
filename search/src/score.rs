use evaluation::scores::MATE_VALUE;
use uci::commands::Score;

use crate::MAX_DEPTH;

#[inline(always)]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_VALUE - MAX_DEPTH as i32
}

pub fn convert_mate_score(score: i32) -> Score {
    let mate_plies = (MATE_VALUE - score.abs()).max(0);
    let mate_in = (mate_plies + 1) / 2;
    if score > 0 {
        Score::Mate(mate_in)
    } else {
        Score::Mate(-mate_in)
    }
}

pub fn convert_score(score: i32) -> Score {
    if is_mate_score(score) {
        convert_mate_score(score)
    } else {
        Score::Centipawns(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_mate_in_one() {
        // Mate in 1 ply = mate in 1 move
        assert_eq!(convert_score(MATE_VALUE - 1), Score::Mate(1));
    }

    #[test]
    fn test_convert_mate_in_two() {
        // Mate in 3 plies = mate in 2 moves (we move, they move, we mate)
        assert_eq!(convert_score(MATE_VALUE - 3), Score::Mate(2));
    }

    #[test]
    fn test_convert_mated() {
        // Mated after our move and theirs
        assert_eq!(convert_score(-(MATE_VALUE - 2)), Score::Mate(-1));
    }

    #[test]
    fn test_convert_centipawns() {
        assert_eq!(convert_score(-980), Score::Centipawns(-980));
        assert!(!is_mate_score(5_000));
    }
}

use cozy_chess::Color;
use rand::seq::SliceRandom;
use rand::Rng;
use utils::{GameState, Outcome};

use crate::SearchError;

/// Plays uniformly random moves from the current position until the game ends
/// or `max_steps` plies have been played, then rewinds `ctx`.
///
/// Returns 1.0 if `perspective` delivered mate, -1.0 if it was mated, 0.0 otherwise.
pub fn random_playout<R: Rng>(
    ctx: &mut GameState,
    perspective: Color,
    max_steps: u32,
    rng: &mut R,
) -> Result<f64, SearchError> {
    let start = ctx.head_index();
    let mut steps = 0;

    let result = loop {
        let Some(moves) = ctx.legal_moves() else {
            break terminal_result(ctx, perspective);
        };
        if steps >= max_steps {
            break 0.0;
        }
        // A live position always has at least one move.
        let Some(mv) = moves.choose(rng) else {
            break 0.0;
        };
        if let Err(e) = ctx.execute_move(mv) {
            ctx.undo_to_index(start);
            return Err(e.into());
        }
        steps += 1;
    };

    ctx.undo_to_index(start);
    Ok(result)
}

#[inline(always)]
fn terminal_result(ctx: &GameState, perspective: Color) -> f64 {
    match ctx.outcome() {
        Some(Outcome::Checkmate) if ctx.side_to_move() == perspective => -1.0,
        Some(Outcome::Checkmate) => 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mated_position_scores_for_the_winner() {
        let mut ctx = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(random_playout(&mut ctx, Color::White, 100, &mut rng).unwrap(), 1.0);
        assert_eq!(random_playout(&mut ctx, Color::Black, 100, &mut rng).unwrap(), -1.0);
    }

    #[test]
    fn test_stalemate_is_a_draw() {
        let mut ctx = GameState::from_fen("7k/8/6Q1/8/8/8/8/K7 b - - 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(random_playout(&mut ctx, Color::White, 100, &mut rng).unwrap(), 0.0);
    }

    #[test]
    fn test_step_cap_is_a_draw() {
        let mut ctx = GameState::new(cozy_chess::Board::default());
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(random_playout(&mut ctx, Color::White, 0, &mut rng).unwrap(), 0.0);
    }

    #[test]
    fn test_playout_rewinds_context() {
        let mut ctx = GameState::new(cozy_chess::Board::default());
        let before = ctx.fingerprint();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..5 {
            let result = random_playout(&mut ctx, Color::White, 60, &mut rng).unwrap();
            assert!((-1.0..=1.0).contains(&result));
            assert_eq!(ctx.fingerprint(), before);
            assert_eq!(ctx.head_index(), 0);
        }
    }
}

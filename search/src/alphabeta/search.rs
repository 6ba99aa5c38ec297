use evaluation::evaluate;
use evaluation::scores::{DRAW_VALUE, MATE_VALUE};
use utils::{GameState, Outcome};

use super::engine::AlphaBetaEngine;
use crate::move_ordering::order_moves;
use crate::pruning::mate_distance_prune;
use crate::transposition::Bound;
use crate::SearchError;

impl AlphaBetaEngine {
    /// Negamax with fail-hard alpha-beta. Returns the value of `ctx` for the side to move.
    ///
    /// An aborted call returns 0; the caller discards the result.
    pub(super) fn alpha_beta(
        &mut self,
        ctx: &mut GameState,
        depth: u8,
        ply: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32, SearchError> {
        if self.stopped() {
            return Ok(0);
        }
        self.stats.nodes += 1;

        if ply > 0 && mate_distance_prune(&mut alpha, &mut beta, ply) {
            return Ok(alpha);
        }

        let key = ctx.fingerprint();
        if let Some(value) = self.tt.lookup(&key, depth, alpha, beta) {
            self.stats.tt_hits += 1;
            if ply == 0 {
                self.root_move = self.tt.best_move(&key);
            }
            return Ok(value);
        }

        if depth == 0 {
            return Ok(leaf_score(ctx, ply));
        }

        let Some(mut moves) = ctx.legal_moves() else {
            return Ok(terminal_score(ctx.outcome(), ply));
        };
        order_moves(ctx.current(), &mut moves);

        let index = ctx.head_index();
        let mut best_move = None;

        for mv in moves {
            ctx.execute_move(&mv)?;
            let score = -self.alpha_beta(ctx, depth - 1, ply + 1, -beta, -alpha)?;
            ctx.undo_to_index(index);
            self.stats.moves_evaluated += 1;

            if self.stopped() {
                return Ok(0);
            }

            if score >= beta {
                self.stats.cutoffs += 1;
                self.tt.store(key, beta, depth, Bound::Lower, Some(mv));
                return Ok(beta);
            }

            if score > alpha {
                alpha = score;
                best_move = Some(mv);
                if ply == 0 {
                    self.root_move = Some(mv);
                }
            }
        }

        let bound = if best_move.is_some() {
            Bound::Exact
        } else {
            Bound::Upper
        };
        self.tt.store(key, alpha, depth, bound, best_move);
        Ok(alpha)
    }
}

/// Static value at the horizon. A move that ended the game scores as the terminal it reached.
#[inline(always)]
pub(super) fn leaf_score(ctx: &GameState, ply: u8) -> i32 {
    match ctx.last_half_move().and_then(|half_move| half_move.outcome) {
        Some(outcome) => terminal_score(Some(outcome), ply),
        None => evaluate(ctx.current()),
    }
}

/// Value of a position without legal moves, for the side to move.
#[inline(always)]
pub(super) fn terminal_score(outcome: Option<Outcome>, ply: u8) -> i32 {
    match outcome {
        Some(Outcome::Checkmate) => -(MATE_VALUE - ply as i32),
        _ => DRAW_VALUE,
    }
}

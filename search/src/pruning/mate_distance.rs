use evaluation::scores::MATE_VALUE;

// Mate Distance Pruning (MDP)
//
// Adjusts alpha-beta bounds based on the best and worst mate still possible at this ply.
// Returns true if the search can be pruned immediately.
//
// Example: a node at ply P is at least P plies from the root, so:
// - Best possible score: MATE_VALUE - P (we mate right here)
// - Worst possible score: -(MATE_VALUE - P) (we are mated right here)
#[inline(always)]
pub fn mate_distance_prune(alpha: &mut i32, beta: &mut i32, ply: u8) -> bool {
    let mate_in_ply = MATE_VALUE - ply as i32;
    let mated_in_ply = -mate_in_ply;

    *alpha = (*alpha).max(mated_in_ply);
    *beta = (*beta).min(mate_in_ply);

    *alpha >= *beta
}

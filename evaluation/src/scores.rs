// Score bounds and special values for alpha-beta search.
pub const POS_INFINITY: i32 = 9_999_999;
pub const NEG_INFINITY: i32 = -POS_INFINITY;
/// Base value for checkmate. Actual mate scores are MATE_VALUE - ply to distinguish faster mates.
pub const MATE_VALUE: i32 = 100_000;
pub const DRAW_VALUE: i32 = 0;

mod main;

pub use main::{order_moves, score_move, CAPTURE_BIAS, PROMOTION_BIAS};

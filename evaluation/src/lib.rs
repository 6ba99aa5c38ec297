mod evaluator;
mod mop_up;
mod piece_values;
pub mod pst;
pub mod scores;

pub use evaluator::{evaluate, material, positional};
pub use mop_up::mop_up;
pub use piece_values::piece_value;
pub use pst::pst_value;

mod main;

pub use main::{Bound, TTEntry, TranspositionTable};

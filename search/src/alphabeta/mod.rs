mod engine;
mod search;

pub use engine::{AlphaBetaEngine, SearchStats};

mod engine;
mod node;
mod playout;
mod tree;

pub use engine::{MctsEngine, MctsStats};

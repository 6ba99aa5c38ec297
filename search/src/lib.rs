mod alphabeta;
pub mod arena;
mod baseline;
mod config;
mod def;
mod error;
mod mcts;
mod move_ordering;
mod pruning;
mod score;
mod transposition;


/// Maximum search depth supported by the engine.
pub const MAX_DEPTH: usize = 64;

pub use alphabeta::{AlphaBetaEngine, SearchStats};
pub use baseline::{RandomAggressiveEngine, SimpleEngine};
pub use config::{
    AlphaBetaSettings, EngineConfig, EngineKind, EngineSettings, MctsSettings,
    DEFAULT_TABLE_CAPACITY,
};
pub use def::{CustomSettings, Engine};
pub use error::SearchError;
pub use mcts::{MctsEngine, MctsStats};
pub use move_ordering::{order_moves, score_move, CAPTURE_BIAS, PROMOTION_BIAS};
pub use transposition::{Bound, TTEntry, TranspositionTable};

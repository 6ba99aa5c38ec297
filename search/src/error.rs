use thiserror::Error;
use utils::IllegalMoveError;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Settings meant for one engine type were handed to another. Fatal.
    #[error("{engine} engine cannot apply {settings} settings")]
    ConfigurationMismatch {
        engine: &'static str,
        settings: &'static str,
    },

    /// The engine was asked to search without the state it needs, usually a position.
    #[error("search state unavailable: {0}")]
    StateRetrievalFailure(&'static str),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A generated move was rejected by the game state.
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}

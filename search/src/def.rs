use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use cozy_chess::Board;
use uci::{commands::GoParams, UciOutput};
use utils::ChessMove;

use crate::{EngineSettings, SearchError};

pub trait Engine: Send {
    fn name(&self) -> String;

    /// Prepares for a new game, dropping anything carried over from the last one.
    fn start(&mut self);

    /// `game_history` holds the hashes of earlier positions, oldest first, for repetition checks.
    fn set_position(&mut self, board: Board, game_history: Vec<u64>);

    /// Searches the current position to completion.
    ///
    /// Returns `Ok(None)` when the position has no legal moves or the search
    /// was aborted through the stop flag.
    fn best_move(
        &mut self,
        params: &GoParams,
        output: Option<&Sender<UciOutput>>,
    ) -> Result<Option<(ChessMove, i32)>, SearchError>;

    fn stop(&mut self);

    /// The shared abort flag, for cancelling a search running on another thread.
    fn stop_handle(&self) -> Arc<AtomicBool>;

    fn shut_down(&mut self);

    /// Engines with tunable parameters expose them here.
    fn custom_settings(&mut self) -> Option<&mut dyn CustomSettings> {
        None
    }
}

pub trait CustomSettings {
    fn apply_custom_settings(&mut self, settings: &EngineSettings) -> Result<(), SearchError>;
}

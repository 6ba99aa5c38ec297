use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use cozy_chess::Board;
use log::debug;
use uci::{commands::GoParams, UciOutput};
use utils::ChessMove;

use super::{current_board, legal_moves, split_by_capture};
use crate::{CustomSettings, Engine, EngineSettings, SearchError};

/// Always captures when it can; otherwise moves the frontmost, leftmost piece as far as it goes.
#[derive(Default)]
pub struct SimpleEngine {
    board: Option<Board>,
    game_history: Vec<u64>,
    stop: Arc<AtomicBool>,
}

impl SimpleEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for SimpleEngine {
    fn name(&self) -> String {
        "Simple".to_string()
    }

    fn start(&mut self) {
        self.board = None;
        self.game_history.clear();
    }

    fn set_position(&mut self, board: Board, game_history: Vec<u64>) {
        self.board = Some(board);
        self.game_history = game_history;
    }

    fn best_move(
        &mut self,
        _params: &GoParams,
        _output: Option<&Sender<UciOutput>>,
    ) -> Result<Option<(ChessMove, i32)>, SearchError> {
        let board = current_board(self.board.as_ref())?;
        let Some(moves) = legal_moves(board, &self.game_history) else {
            return Ok(None);
        };

        let (captures, quiets) = split_by_capture(board, &moves);
        let choice = captures.first().or(quiets.first()).copied();
        debug!("Simple picks {:?} out of {} moves", choice, moves.len());
        Ok(choice.map(|mv| (mv, 0)))
    }

    fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    fn shut_down(&mut self) {
        self.board = None;
    }

    fn custom_settings(&mut self) -> Option<&mut dyn CustomSettings> {
        Some(self)
    }
}

impl CustomSettings for SimpleEngine {
    fn apply_custom_settings(&mut self, settings: &EngineSettings) -> Result<(), SearchError> {
        match settings {
            EngineSettings::Simple => Ok(()),
            other => Err(SearchError::ConfigurationMismatch {
                engine: "Simple",
                settings: other.kind().name(),
            }),
        }
    }
}

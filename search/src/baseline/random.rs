use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use cozy_chess::Board;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uci::{commands::GoParams, UciOutput};
use utils::ChessMove;

use super::{current_board, legal_moves, split_by_capture};
use crate::{CustomSettings, Engine, EngineSettings, SearchError};

/// Chance of capturing when at least one capture is available.
pub const CAPTURE_CHANCE: f64 = 0.5;

/// Plays a uniformly random move, preferring captures with probability [`CAPTURE_CHANCE`].
pub struct RandomAggressiveEngine {
    board: Option<Board>,
    game_history: Vec<u64>,
    seed: Option<u64>,
    rng: StdRng,
    stop: Arc<AtomicBool>,
}

impl RandomAggressiveEngine {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            board: None,
            game_history: Vec::new(),
            seed,
            rng: seeded_rng(seed),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for RandomAggressiveEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Engine for RandomAggressiveEngine {
    fn name(&self) -> String {
        "RandomAggressive".to_string()
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
        let capture =
            !captures.is_empty() && (quiets.is_empty() || self.rng.gen_bool(CAPTURE_CHANCE));
        let pool = if capture { &captures } else { &quiets };

        let choice = pool.choose(&mut self.rng).copied();
        debug!("RandomAggressive picks {:?} (capture: {})", choice, capture);
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

impl CustomSettings for RandomAggressiveEngine {
    fn apply_custom_settings(&mut self, settings: &EngineSettings) -> Result<(), SearchError> {
        let EngineSettings::RandomAggressive { seed } = *settings else {
            return Err(SearchError::ConfigurationMismatch {
                engine: "RandomAggressive",
                settings: settings.kind().name(),
            });
        };

        if seed.is_some() && seed != self.seed {
            self.rng = seeded_rng(seed);
        }
        self.seed = seed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils::is_capture;

    const HANGING_QUEEN: &str = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1";

    fn engine_at(fen: &str, seed: u64) -> RandomAggressiveEngine {
        let mut engine = RandomAggressiveEngine::new(Some(seed));
        engine.set_position(fen.parse().unwrap(), Vec::new());
        engine
    }

    #[test]
    fn test_captures_about_half_the_time() {
        let board: Board = HANGING_QUEEN.parse().unwrap();
        let mut engine = engine_at(HANGING_QUEEN, 11);

        let captures = (0..400)
            .map(|_| engine.best_move(&GoParams::default(), None).unwrap().unwrap().0)
            .filter(|mv| is_capture(&board, mv))
            .count();
        assert!((120..=280).contains(&captures), "{} captures", captures);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let play = |seed| {
            let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
            let mut engine = engine_at(start, seed);
            (0..10)
                .map(|_| engine.best_move(&GoParams::default(), None).unwrap().unwrap().0)
                .collect::<Vec<_>>()
        };
        assert_eq!(play(5), play(5));
    }

    #[test]
    fn test_only_captures_left() {
        // The rook covers g1 and h2, so taking it is the king's only move.
        let mut engine = engine_at("k7/8/8/8/8/8/6r1/7K w - - 0 1", 1);
        for _ in 0..10 {
            let (mv, _) = engine.best_move(&GoParams::default(), None).unwrap().unwrap();
            assert_eq!(mv.to_string(), "h1g2");
        }
    }

    #[test]
    fn test_rejects_foreign_settings() {
        let mut engine = RandomAggressiveEngine::default();
        let result = engine.apply_custom_settings(&EngineSettings::Simple);
        assert!(matches!(result, Err(SearchError::ConfigurationMismatch { .. })));
        assert!(engine
            .apply_custom_settings(&EngineSettings::RandomAggressive { seed: Some(2) })
            .is_ok());
    }
}

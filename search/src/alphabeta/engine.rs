use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};

use cozy_chess::Board;
use evaluation::scores::{NEG_INFINITY, POS_INFINITY};
use log::{debug, info};
use uci::commands::{GoParams, Info};
use uci::{pv_to_uci, UciOutput};
use utils::{ChessMove, GameState};

use crate::score::convert_score;
use crate::transposition::TranspositionTable;
use crate::{AlphaBetaSettings, CustomSettings, Engine, EngineSettings, SearchError, MAX_DEPTH};

/// Counters for one root search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u32,
    pub moves_evaluated: u32,
    pub cutoffs: u32,
    pub tt_hits: u32,
}

/// Fixed-depth negamax with alpha-beta pruning and a transposition table.
pub struct AlphaBetaEngine {
    pub(super) settings: AlphaBetaSettings,
    pub(super) board: Option<Board>,
    pub(super) game_history: Vec<u64>,
    pub(super) tt: TranspositionTable,
    pub(super) stats: SearchStats,
    /// Best root move of the search in progress.
    pub(super) root_move: Option<ChessMove>,
    pub(super) stop: Arc<AtomicBool>,
}

impl AlphaBetaEngine {
    pub fn new(settings: AlphaBetaSettings) -> Self {
        Self {
            settings,
            board: None,
            game_history: Vec::new(),
            tt: TranspositionTable::new(settings.table_capacity),
            stats: SearchStats::default(),
            root_move: None,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn settings(&self) -> &AlphaBetaSettings {
        &self.settings
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline(always)]
    pub(super) fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    fn init_search(&mut self) {
        self.tt.clear();
        self.stats = SearchStats::default();
        self.root_move = None;
    }

    fn send_search_info(
        &self,
        output: &Sender<UciOutput>,
        depth: u8,
        score: i32,
        mv: ChessMove,
        elapsed: Duration,
    ) {
        let nps = (self.stats.nodes as f64 / elapsed.as_secs_f64().max(1e-3)) as u32;
        let sent = output.send(UciOutput::Info(Info {
            depth,
            nodes: self.stats.nodes,
            nodes_per_second: nps,
            time: elapsed.as_millis() as u32,
            score: convert_score(score),
            pv: pv_to_uci(&[mv]),
        }));
        if sent.is_err() {
            debug!("UCI output closed, dropping search info");
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(AlphaBetaSettings::default())
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> String {
        format!("AlphaBeta (depth {})", self.settings.search_depth)
    }

    fn start(&mut self) {
        self.tt.clear();
        self.board = None;
        self.game_history.clear();
    }

    fn set_position(&mut self, board: Board, game_history: Vec<u64>) {
        self.board = Some(board);
        self.game_history = game_history;
    }

    fn best_move(
        &mut self,
        params: &GoParams,
        output: Option<&Sender<UciOutput>>,
    ) -> Result<Option<(ChessMove, i32)>, SearchError> {
        let board = self
            .board
            .clone()
            .ok_or(SearchError::StateRetrievalFailure("no position set"))?;

        let depth = params
            .depth
            .filter(|&d| d > 0)
            .map_or(self.settings.search_depth, |d| d.min(MAX_DEPTH as u8));
        if let Some(ms) = params.move_time {
            debug!("movetime {}ms is not enforced, searching to depth {}", ms, depth);
        }

        self.init_search();
        let mut ctx = GameState::with_history(board, &self.game_history);
        let started = Instant::now();

        let score = self.alpha_beta(&mut ctx, depth, 0, NEG_INFINITY, POS_INFINITY)?;
        let elapsed = started.elapsed();

        if self.stopped() {
            debug!("Search aborted after {} nodes", self.stats.nodes);
            return Ok(None);
        }

        info!(
            "AlphaBeta depth {}: {} nodes, {} moves, {} cutoffs, {} table hits, {} entries, {:?}",
            depth,
            self.stats.nodes,
            self.stats.moves_evaluated,
            self.stats.cutoffs,
            self.stats.tt_hits,
            self.tt.len(),
            elapsed
        );

        let Some(mv) = self.root_move else {
            return Ok(None);
        };
        if let Some(output) = output {
            self.send_search_info(output, depth, score, mv, elapsed);
        }
        Ok(Some((mv, score)))
    }

    fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    fn shut_down(&mut self) {
        self.stop();
        self.tt.clear();
        self.board = None;
        debug!("AlphaBeta engine shut down");
    }

    fn custom_settings(&mut self) -> Option<&mut dyn CustomSettings> {
        Some(self)
    }
}

impl CustomSettings for AlphaBetaEngine {
    fn apply_custom_settings(&mut self, settings: &EngineSettings) -> Result<(), SearchError> {
        let EngineSettings::AlphaBeta(new) = settings else {
            return Err(SearchError::ConfigurationMismatch {
                engine: "AlphaBeta",
                settings: settings.kind().name(),
            });
        };
        settings.validate()?;

        if new.table_capacity != self.tt.capacity() {
            self.tt = TranspositionTable::new(new.table_capacity);
        }
        self.settings = *new;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MctsSettings;
    use evaluation::scores::MATE_VALUE;
    use std::sync::mpsc::channel;
    use uci::commands::Score;

    fn engine_at(fen: &str, depth: u8) -> AlphaBetaEngine {
        let mut engine = AlphaBetaEngine::new(AlphaBetaSettings {
            search_depth: depth,
            ..Default::default()
        });
        engine.set_position(fen.parse().unwrap(), Vec::new());
        engine
    }

    #[test]
    fn test_missing_position_is_an_error() {
        let mut engine = AlphaBetaEngine::default();
        let result = engine.best_move(&GoParams::default(), None);

        assert!(matches!(result, Err(SearchError::StateRetrievalFailure(_))));
    }

    #[test]
    fn test_mate_in_one() {
        for depth in 1..=3 {
            let mut engine = engine_at("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", depth);
            let (mv, score) = engine.best_move(&GoParams::default(), None).unwrap().unwrap();

            assert_eq!(mv.to_string(), "a1a8");
            assert_eq!(score, MATE_VALUE - 1);
        }
    }

    #[test]
    fn test_black_finds_mate_in_one() {
        let mut engine = engine_at("8/8/8/8/8/2k5/r7/2K5 b - - 0 1", 2);
        let (mv, score) = engine.best_move(&GoParams::default(), None).unwrap().unwrap();

        assert_eq!(mv.to_string(), "a2a1");
        assert_eq!(score, MATE_VALUE - 1);
    }

    #[test]
    fn test_raised_stop_flag_is_left_alone() {
        let mut engine = engine_at("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 3);
        let stop = engine.stop_handle();
        stop.store(true, Ordering::Relaxed);

        assert_eq!(engine.best_move(&GoParams::default(), None).unwrap(), None);
        assert!(stop.load(Ordering::Relaxed));

        stop.store(false, Ordering::Relaxed);
        assert!(engine.best_move(&GoParams::default(), None).unwrap().is_some());
    }

    #[test]
    fn test_no_move_when_game_is_over() {
        let mut engine = engine_at("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1", 3);
        assert_eq!(engine.best_move(&GoParams::default(), None).unwrap(), None);
    }

    #[test]
    fn test_wins_hanging_queen() {
        let mut engine = engine_at("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1", 2);
        let (mv, score) = engine.best_move(&GoParams::default(), None).unwrap().unwrap();

        assert_eq!(mv.to_string(), "d2d5");
        assert!(score > 0);
    }

    #[test]
    fn test_go_depth_overrides_settings() {
        let mut engine = engine_at("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 4);
        let params = GoParams {
            depth: Some(1),
            ..Default::default()
        };
        engine.best_move(&params, None).unwrap();
        let shallow = engine.stats().nodes;

        engine.best_move(&GoParams::default(), None).unwrap();
        assert!(engine.stats().nodes > shallow);
    }

    #[test]
    fn test_reports_mate_score_over_uci() {
        let mut engine = engine_at("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 2);
        let (tx, rx) = channel();
        engine.best_move(&GoParams::default(), Some(&tx)).unwrap();

        let UciOutput::Info(info) = rx.recv().unwrap() else {
            panic!("Expected Info")
        };
        assert_eq!(info.score, Score::Mate(1));
        assert_eq!(info.pv, vec!["a1a8".to_string()]);
    }

    #[test]
    fn test_configuration_mismatch() {
        let mut engine = AlphaBetaEngine::default();
        let settings = EngineSettings::Mcts(MctsSettings::default());
        let result = engine.custom_settings().unwrap().apply_custom_settings(&settings);

        assert!(matches!(
            result,
            Err(SearchError::ConfigurationMismatch { engine: "AlphaBeta", settings: "MCTS" })
        ));
    }

    #[test]
    fn test_apply_settings() {
        let mut engine = AlphaBetaEngine::default();
        let settings = EngineSettings::AlphaBeta(AlphaBetaSettings {
            search_depth: 6,
            table_capacity: 500,
        });
        engine.apply_custom_settings(&settings).unwrap();

        assert_eq!(engine.settings().search_depth, 6);
        assert_eq!(engine.tt.capacity(), 500);

        let invalid = EngineSettings::AlphaBeta(AlphaBetaSettings {
            search_depth: 0,
            table_capacity: 500,
        });
        assert!(engine.apply_custom_settings(&invalid).is_err());
        assert_eq!(engine.settings().search_depth, 6);
    }
}

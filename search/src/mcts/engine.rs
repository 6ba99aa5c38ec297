use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};

use cozy_chess::{Board, Color};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use uci::commands::{GoParams, Info, Score};
use uci::{pv_to_uci, UciOutput};
use utils::{ChessMove, GameState};

use super::playout::random_playout;
use super::tree::SearchTree;
use crate::{CustomSettings, Engine, EngineSettings, MctsSettings, SearchError};

/// Counters for one decision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MctsStats {
    pub iterations: u32,
    pub playouts: u32,
    /// Visits the root already had when the decision started.
    pub reused_visits: u32,
    pub tree_size: usize,
}

/// Monte-Carlo tree search with UCB1 selection and uniform random playouts.
///
/// The tree survives between decisions: after choosing a move the engine
/// re-roots to it, and the next decision continues from the opponent's reply
/// if that reply is already in the tree.
pub struct MctsEngine {
    settings: MctsSettings,
    board: Option<Board>,
    game_history: Vec<u64>,
    tree: Option<SearchTree>,
    rng: StdRng,
    stats: MctsStats,
    stop: Arc<AtomicBool>,
}

impl MctsEngine {
    pub fn new(settings: MctsSettings) -> Self {
        Self {
            settings,
            board: None,
            game_history: Vec::new(),
            tree: None,
            rng: seeded_rng(settings.seed),
            stats: MctsStats::default(),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn settings(&self) -> &MctsSettings {
        &self.settings
    }

    pub fn stats(&self) -> MctsStats {
        self.stats
    }

    /// Reuses the stored tree if it contains `board`, otherwise starts a new one.
    fn prepare_tree(&mut self, board: &Board) -> SearchTree {
        if let Some(mut tree) = self.tree.take() {
            match tree.find(board) {
                Some(id) if id == tree.root() => return tree,
                Some(id) => {
                    tree.reroot(id, board.clone());
                    return tree;
                }
                None => debug!("Position not in the previous tree, starting a new one"),
            }
        }
        SearchTree::new(board.clone())
    }

    /// One select / expand / simulate / backpropagate pass. Leaves `ctx` at the root.
    fn iterate(
        &mut self,
        tree: &mut SearchTree,
        ctx: &mut GameState,
        side: Color,
    ) -> Result<(), SearchError> {
        let root_index = ctx.head_index();
        let result = self.descend_and_simulate(tree, ctx, side);
        ctx.undo_to_index(root_index);
        result
    }

    fn descend_and_simulate(
        &mut self,
        tree: &mut SearchTree,
        ctx: &mut GameState,
        side: Color,
    ) -> Result<(), SearchError> {
        let mut node = tree.root();
        while let Some(child) = tree.select_child(node) {
            if let Some(mv) = tree.get(child).mv {
                ctx.execute_move(&mv)?;
            }
            node = child;
        }

        if let Some(moves) = ctx.legal_moves() {
            tree.expand(node, &moves);
            if let Some(&child) = tree.get(node).children.choose(&mut self.rng) {
                if let Some(mv) = tree.get(child).mv {
                    ctx.execute_move(&mv)?;
                }
                node = child;
            }
        }

        // Playouts are scored for `side`; the node stores them for whoever moved into it.
        let mover = !ctx.side_to_move();
        let sign = if mover == side { 1.0 } else { -1.0 };

        for _ in 0..self.settings.playouts_per_leaf {
            let result = random_playout(ctx, side, self.settings.max_playout_steps, &mut self.rng)?;
            tree.backpropagate(node, sign * result);
            self.stats.playouts += 1;
        }
        Ok(())
    }

    fn send_search_info(
        &self,
        output: &Sender<UciOutput>,
        tree: &SearchTree,
        mv: ChessMove,
        mean: f64,
        elapsed: Duration,
    ) {
        let nps = (self.stats.playouts as f64 / elapsed.as_secs_f64().max(1e-3)) as u32;
        let sent = output.send(UciOutput::Info(Info {
            depth: 1,
            nodes: tree.len() as u32,
            nodes_per_second: nps,
            time: elapsed.as_millis() as u32,
            score: Score::Centipawns(mean_to_centipawns(mean)),
            pv: pv_to_uci(&[mv]),
        }));
        if sent.is_err() {
            debug!("UCI output closed, dropping search info");
        }
    }
}

/// Maps a mean playout result in [-1, 1] onto a centipawn-like scale.
#[inline(always)]
fn mean_to_centipawns(mean: f64) -> i32 {
    (mean * 100.0).round() as i32
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Default for MctsEngine {
    fn default() -> Self {
        Self::new(MctsSettings::default())
    }
}

impl Engine for MctsEngine {
    fn name(&self) -> String {
        format!("MCTS ({} leaves)", self.settings.leaf_budget)
    }

    fn start(&mut self) {
        self.tree = None;
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
        if let Some(ms) = params.move_time {
            debug!(
                "movetime {}ms is not enforced, running {} iterations",
                ms, self.settings.leaf_budget
            );
        }

        self.stats = MctsStats::default();

        let mut ctx = GameState::with_history(board.clone(), &self.game_history);
        if ctx.legal_moves().is_none() {
            return Ok(None);
        }

        let side = board.side_to_move();
        let mut tree = self.prepare_tree(&board);
        self.stats.reused_visits = tree.get(tree.root()).visits;
        let started = Instant::now();

        for _ in 0..self.settings.leaf_budget {
            if self.stop.load(Ordering::Relaxed) {
                debug!("MCTS aborted after {} iterations", self.stats.iterations);
                self.tree = Some(tree);
                return Ok(None);
            }
            self.iterate(&mut tree, &mut ctx, side)?;
            self.stats.iterations += 1;
        }
        let elapsed = started.elapsed();
        self.stats.tree_size = tree.len();

        let Some(best) = tree.best_child(tree.root()) else {
            self.tree = Some(tree);
            return Ok(None);
        };
        let node = tree.get(best);
        let Some(mv) = node.mv else {
            self.tree = Some(tree);
            return Ok(None);
        };
        let (mean, visits) = (node.mean_score(), node.visits);

        info!(
            "MCTS: {} iters, {} playouts, {} nodes, {} reused, best {} ({} visits, {:.3}), {:?}",
            self.stats.iterations,
            self.stats.playouts,
            self.stats.tree_size,
            self.stats.reused_visits,
            mv,
            visits,
            mean,
            elapsed
        );
        if let Some(output) = output {
            self.send_search_info(output, &tree, mv, mean, elapsed);
        }

        ctx.execute_move(&mv)?;
        tree.reroot(best, ctx.current().clone());
        self.tree = Some(tree);

        Ok(Some((mv, mean_to_centipawns(mean))))
    }

    fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    fn shut_down(&mut self) {
        self.stop();
        self.tree = None;
        self.board = None;
        debug!("MCTS engine shut down");
    }

    fn custom_settings(&mut self) -> Option<&mut dyn CustomSettings> {
        Some(self)
    }
}

impl CustomSettings for MctsEngine {
    fn apply_custom_settings(&mut self, settings: &EngineSettings) -> Result<(), SearchError> {
        let EngineSettings::Mcts(new) = settings else {
            return Err(SearchError::ConfigurationMismatch {
                engine: "MCTS",
                settings: settings.kind().name(),
            });
        };
        settings.validate()?;

        if new.seed.is_some() && new.seed != self.settings.seed {
            self.rng = seeded_rng(new.seed);
        }
        self.settings = *new;
        Ok(())
    }
}

use std::sync::mpsc::{Receiver, Sender};

use cozy_chess::Board;
use log::{error, warn};
use search::{Engine, EngineSettings};
use uci::commands::GoParams;
use uci::{UciOutput, NULL_MOVE};

/// Commands sent from the UCI thread to the engine worker.
pub enum EngineCommand {
    /// Apply new settings to the engine.
    Configure(Box<EngineSettings>),
    /// Reset engine state for a new game.
    NewGame,
    /// Set the position to search from.
    SetPosition { board: Board, history: Vec<u64> },
    /// Start searching with the given parameters.
    Go(GoParams),
    /// Shut down the worker thread.
    Quit,
}

/// Owns the engine on a dedicated thread so the protocol loop stays responsive.
pub struct EngineWorker {
    engine: Box<dyn Engine>,
    rx: Receiver<EngineCommand>,
    output: Sender<UciOutput>,
}

impl EngineWorker {
    pub fn new(
        engine: Box<dyn Engine>,
        rx: Receiver<EngineCommand>,
        output: Sender<UciOutput>,
    ) -> Self {
        Self { engine, rx, output }
    }

    /// Processes commands until Quit is received or the sender hangs up.
    pub fn run(mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Go(params) => {
                    let best_move = match self.engine.best_move(&params, Some(&self.output)) {
                        Ok(Some((mv, _))) => mv.to_string(),
                        Ok(None) => NULL_MOVE.to_string(),
                        Err(e) => {
                            error!("{} failed to search: {}", self.engine.name(), e);
                            NULL_MOVE.to_string()
                        }
                    };

                    // UCI requires a bestmove for every go, even without legal moves
                    let _ = self.output.send(UciOutput::BestMove(best_move));
                }
                EngineCommand::SetPosition { board, history } => {
                    self.engine.set_position(board, history);
                }
                EngineCommand::NewGame => {
                    self.engine.start();
                }
                EngineCommand::Configure(settings) => {
                    if let Some(custom) = self.engine.custom_settings() {
                        if let Err(e) = custom.apply_custom_settings(&settings) {
                            warn!("Rejected settings {:?}: {}", settings, e);
                        }
                    }
                }
                EngineCommand::Quit => break,
            }
        }

        self.engine.shut_down();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search::{AlphaBetaEngine, AlphaBetaSettings};
    use std::sync::mpsc::channel;
    use std::thread;

    fn run_worker(commands: Vec<EngineCommand>) -> Vec<String> {
        let (cmd_tx, cmd_rx) = channel();
        let (out_tx, out_rx) = channel();

        let worker = EngineWorker::new(Box::new(AlphaBetaEngine::default()), cmd_rx, out_tx);
        let handle = thread::spawn(move || worker.run());

        for cmd in commands {
            cmd_tx.send(cmd).unwrap();
        }
        cmd_tx.send(EngineCommand::Quit).unwrap();
        handle.join().unwrap();

        out_rx
            .try_iter()
            .filter_map(|output| match output {
                UciOutput::BestMove(mv) => Some(mv),
                _ => None,
            })
            .collect()
    }

    fn depth(depth: u8) -> GoParams {
        GoParams {
            depth: Some(depth),
            ..Default::default()
        }
    }

    #[test]
    fn test_replies_with_best_move() {
        let board: Board = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1".parse().unwrap();
        let moves = run_worker(vec![
            EngineCommand::NewGame,
            EngineCommand::SetPosition {
                board,
                history: Vec::new(),
            },
            EngineCommand::Go(depth(2)),
        ]);

        assert_eq!(moves, vec!["a1a8".to_string()]);
    }

    #[test]
    fn test_null_move_when_game_is_over() {
        let board: Board = "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1".parse().unwrap();
        let moves = run_worker(vec![
            EngineCommand::SetPosition {
                board,
                history: Vec::new(),
            },
            EngineCommand::Go(depth(2)),
        ]);

        assert_eq!(moves, vec![NULL_MOVE.to_string()]);
    }

    #[test]
    fn test_null_move_without_position() {
        let moves = run_worker(vec![EngineCommand::Go(depth(2))]);
        assert_eq!(moves, vec![NULL_MOVE.to_string()]);
    }

    #[test]
    fn test_bad_settings_keep_worker_alive() {
        let board: Board = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1".parse().unwrap();
        let moves = run_worker(vec![
            EngineCommand::Configure(Box::new(EngineSettings::AlphaBeta(AlphaBetaSettings {
                search_depth: 0,
                ..Default::default()
            }))),
            EngineCommand::SetPosition {
                board,
                history: Vec::new(),
            },
            EngineCommand::Go(GoParams::default()),
        ]);

        assert_eq!(moves, vec!["a1a8".to_string()]);
    }
}

//! UCI application: speaks the protocol on stdin/stdout and drives the engine worker.

use std::error::Error;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Sender},
    Arc,
};
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};
use search::{EngineConfig, EngineKind};
use uci::{UciConnection, UciInput, UciOutput};

use crate::engine;
use crate::worker::{EngineCommand, EngineWorker};

const ENGINE_NAME: &str = "Gambit";
const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
const ENGINE_AUTHOR: &str = "Gambit contributors";

pub struct Gambit {
    config: EngineConfig,
    kind: EngineKind,
    seed: Option<u64>,
    stop: Arc<AtomicBool>,
    cmd_tx: Sender<EngineCommand>,
    worker_handle: JoinHandle<()>,
}

impl Gambit {
    /// Builds the engine and spawns its worker thread.
    pub fn new(
        kind: EngineKind,
        config: EngineConfig,
        seed: Option<u64>,
        output: Sender<UciOutput>,
    ) -> Result<Self, Box<dyn Error>> {
        let engine = engine::create(kind, &config.settings_for(kind, seed))?;
        let stop = engine.stop_handle();
        info!("Starting {} {} with {}", ENGINE_NAME, ENGINE_VERSION, engine.name());

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let worker = EngineWorker::new(engine, cmd_rx, output);
        let worker_handle = thread::spawn(move || worker.run());

        Ok(Self {
            config,
            kind,
            seed,
            stop,
            cmd_tx,
            worker_handle,
        })
    }

    /// Runs the protocol loop until quit or end of input.
    pub fn run(mut self, mut uci: UciConnection) -> Result<(), Box<dyn Error>> {
        uci.listen(|input, output| self.handle(input, &output))?;

        self.shutdown();
        Ok(())
    }

    fn handle(
        &mut self,
        input: &UciInput,
        output: &Sender<UciOutput>,
    ) -> Result<(), Box<dyn Error>> {
        match input {
            UciInput::Uci => {
                output.send(UciOutput::IdName(format!("{} {}", ENGINE_NAME, ENGINE_VERSION)))?;
                output.send(UciOutput::IdAuthor(ENGINE_AUTHOR.to_string()))?;
                self.config.to_uci(output)?;
                output.send(UciOutput::UciOk)?;
            }
            UciInput::IsReady => {
                output.send(UciOutput::ReadyOk)?;
            }
            UciInput::SetOption { name, value } => {
                if let Err(e) = self.config.update_from_uci(name, value) {
                    warn!("Option setting failed: {}", e);
                } else {
                    debug!("Set option '{}' to '{}'", name, value);
                    let settings = self.config.settings_for(self.kind, self.seed);
                    self.cmd_tx.send(EngineCommand::Configure(Box::new(settings)))?;
                }
            }
            UciInput::UciNewGame => {
                self.cmd_tx.send(EngineCommand::NewGame)?;
            }
            UciInput::Position {
                board,
                game_history,
            } => {
                self.cmd_tx.send(EngineCommand::SetPosition {
                    board: board.clone(),
                    history: game_history.clone(),
                })?;
            }
            UciInput::Go(params) => {
                self.stop.store(false, Ordering::Relaxed);
                self.cmd_tx.send(EngineCommand::Go(params.clone()))?;
            }
            UciInput::Stop => {
                self.stop.store(true, Ordering::Relaxed);
            }
            UciInput::Quit => {
                self.stop.store(true, Ordering::Relaxed);
            }
            UciInput::Unknown(line) => {
                debug!("Unknown command: {}", line);
            }
        }
        Ok(())
    }

    fn shutdown(self) {
        let _ = self.cmd_tx.send(EngineCommand::Quit);
        let _ = self.worker_handle.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Board;
    use std::sync::mpsc::Receiver;
    use uci::commands::GoParams;

    fn app() -> (Gambit, Sender<UciOutput>, Receiver<UciOutput>) {
        let (tx, rx) = mpsc::channel();
        let gambit = Gambit::new(EngineKind::AlphaBeta, EngineConfig::default(), None, tx.clone())
            .unwrap();
        (gambit, tx, rx)
    }

    #[test]
    fn test_uci_handshake_lists_options() {
        let (mut gambit, tx, rx) = app();
        gambit.handle(&UciInput::Uci, &tx).unwrap();

        let lines: Vec<_> = rx.try_iter().collect();
        assert!(matches!(
            lines.first(),
            Some(UciOutput::IdName(name)) if name.starts_with("Gambit")
        ));
        assert!(matches!(lines.last(), Some(UciOutput::UciOk)));
        assert_eq!(
            lines.iter().filter(|l| matches!(l, UciOutput::Option(_))).count(),
            5
        );
        gambit.shutdown();
    }

    #[test]
    fn test_setoption_updates_config() {
        let (mut gambit, tx, _rx) = app();
        let input = UciInput::SetOption {
            name: "Search Depth".to_string(),
            value: "2".to_string(),
        };
        gambit.handle(&input, &tx).unwrap();
        assert_eq!(gambit.config.search_depth.value, 2);

        let bad = UciInput::SetOption {
            name: "Search Depth".to_string(),
            value: "0".to_string(),
        };
        gambit.handle(&bad, &tx).unwrap();
        assert_eq!(gambit.config.search_depth.value, 2);
        gambit.shutdown();
    }

    #[test]
    fn test_go_answers_with_bestmove() {
        let (mut gambit, tx, rx) = app();
        let position = UciInput::Position {
            board: "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1".parse::<Board>().unwrap(),
            game_history: Vec::new(),
        };
        let go = UciInput::Go(GoParams {
            depth: Some(2),
            ..Default::default()
        });

        gambit.handle(&position, &tx).unwrap();
        gambit.handle(&go, &tx).unwrap();

        let best_move = rx
            .iter()
            .find_map(|output| match output {
                UciOutput::BestMove(mv) => Some(mv),
                _ => None,
            })
            .unwrap();
        assert_eq!(best_move, "a1a8");
        gambit.shutdown();
    }

    #[test]
    fn test_go_after_stop_searches_again() {
        let (mut gambit, tx, rx) = app();
        let position = UciInput::Position {
            board: "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1".parse::<Board>().unwrap(),
            game_history: Vec::new(),
        };

        gambit.handle(&UciInput::Stop, &tx).unwrap();
        assert!(gambit.stop.load(Ordering::Relaxed));

        gambit.handle(&position, &tx).unwrap();
        gambit.handle(&UciInput::Go(GoParams::default()), &tx).unwrap();
        assert!(!gambit.stop.load(Ordering::Relaxed));

        let best_move = rx
            .iter()
            .find_map(|output| match output {
                UciOutput::BestMove(mv) => Some(mv),
                _ => None,
            })
            .unwrap();
        assert_eq!(best_move, "a1a8");
        gambit.shutdown();
    }
}

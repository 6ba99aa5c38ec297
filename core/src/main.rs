mod args;
mod duel;
mod engine;
mod gambit;
mod worker;

use std::error::Error;
use std::fs::File;

use args::{Args, Mode};
use clap::Parser;
use gambit::Gambit;
use log::LevelFilter;
use search::{EngineConfig, EngineKind};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use uci::UciConnection;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut config = EngineConfig::default();
    let mut seed = None;

    let kind = match &args.mode {
        Some(Mode::Duel(duel)) => {
            let summary = duel::run(duel)?;
            println!("{}", summary);
            return Ok(());
        }
        None => EngineKind::AlphaBeta,
        Some(Mode::AlphaBeta { depth }) => {
            if let Some(depth) = depth {
                config.update_from_uci("Search Depth", &depth.to_string())?;
            }
            EngineKind::AlphaBeta
        }
        Some(Mode::Mcts {
            leaf_budget,
            playouts_per_leaf,
            max_playout_steps,
            seed: mcts_seed,
        }) => {
            if let Some(v) = leaf_budget {
                config.update_from_uci("Leaf Budget", &v.to_string())?;
            }
            if let Some(v) = playouts_per_leaf {
                config.update_from_uci("Playouts Per Leaf", &v.to_string())?;
            }
            if let Some(v) = max_playout_steps {
                config.update_from_uci("Max Playout Steps", &v.to_string())?;
            }
            seed = *mcts_seed;
            EngineKind::Mcts
        }
    };

    let uci = UciConnection::new();
    let gambit = Gambit::new(kind, config, seed, uci.output())?;
    gambit.run(uci)
}

fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
    match (&args.mode, &args.log_file) {
        (_, Some(log_file)) => {
            WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(log_file)?)?
        }
        (Some(Mode::Duel(_)), None) => TermLogger::init(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
        _ => {}
    }
    Ok(())
}

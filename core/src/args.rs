use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use search::EngineKind;

#[derive(Parser, Debug)]
#[command(name = "Gambit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Write logs to a file. In UCI mode stdout belongs to the protocol.
    #[arg(short, long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Speak UCI with the alpha-beta engine (default).
    AlphaBeta {
        #[arg(long)]
        depth: Option<u8>,
    },
    /// Speak UCI with the Monte-Carlo tree search engine.
    Mcts {
        #[arg(long)]
        leaf_budget: Option<u32>,

        #[arg(long)]
        playouts_per_leaf: Option<u32>,

        #[arg(long)]
        max_playout_steps: Option<u32>,

        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play engines against each other and report the score.
    Duel(DuelArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct DuelArgs {
    #[arg(long, value_enum, default_value_t = EngineChoice::AlphaBeta)]
    pub white: EngineChoice,

    #[arg(long, value_enum, default_value_t = EngineChoice::Mcts)]
    pub black: EngineChoice,

    #[arg(long, default_value_t = 10)]
    pub games: usize,

    /// Start position; the standard one when omitted.
    #[arg(long)]
    pub fen: Option<String>,

    #[arg(long, default_value_t = 200)]
    pub max_plies: usize,

    #[arg(long, default_value_t = 4)]
    pub depth: u8,

    #[arg(long, default_value_t = 1000)]
    pub leaf_budget: u32,

    /// Base seed for MCTS and random engines; each game and side derives its own.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineChoice {
    AlphaBeta,
    Mcts,
    Simple,
    RandomAggressive,
}

impl From<EngineChoice> for EngineKind {
    fn from(choice: EngineChoice) -> Self {
        match choice {
            EngineChoice::AlphaBeta => EngineKind::AlphaBeta,
            EngineChoice::Mcts => EngineKind::Mcts,
            EngineChoice::Simple => EngineKind::Simple,
            EngineChoice::RandomAggressive => EngineKind::RandomAggressive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_uci_mode() {
        let args = Args::try_parse_from(["gambit"]).unwrap();
        assert!(args.mode.is_none());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_mcts_mode() {
        let args =
            Args::try_parse_from(["gambit", "mcts", "--leaf-budget", "50", "--seed", "3"]).unwrap();

        match args.mode {
            Some(Mode::Mcts {
                leaf_budget, seed, ..
            }) => {
                assert_eq!(leaf_budget, Some(50));
                assert_eq!(seed, Some(3));
            }
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn test_duel_mode() {
        let args = Args::try_parse_from([
            "gambit", "duel", "--white", "mcts", "--black", "alpha-beta", "--games", "2",
            "--log-file", "duel.log",
        ])
        .unwrap();

        let Some(Mode::Duel(duel)) = args.mode else {
            panic!("expected duel mode");
        };
        assert_eq!(duel.white, EngineChoice::Mcts);
        assert_eq!(duel.black, EngineChoice::AlphaBeta);
        assert_eq!(duel.games, 2);
        assert_eq!(duel.max_plies, 200);
        assert_eq!(args.log_file, Some(PathBuf::from("duel.log")));
    }

    #[test]
    fn test_baseline_engine_names() {
        let args = Args::try_parse_from([
            "gambit", "duel", "--white", "simple", "--black", "random-aggressive",
        ])
        .unwrap();

        let Some(Mode::Duel(duel)) = args.mode else {
            panic!("expected duel mode");
        };
        assert_eq!(EngineKind::from(duel.white), EngineKind::Simple);
        assert_eq!(EngineKind::from(duel.black), EngineKind::RandomAggressive);
    }
}

use std::error::Error;
use std::fmt;

use cozy_chess::{Board, Color};
use log::info;
use rayon::prelude::*;
use search::arena::{play_game, GameRecord};
use search::{EngineConfig, EngineKind, SearchError};

use crate::args::DuelArgs;
use crate::engine;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DuelSummary {
    pub white_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
}

impl DuelSummary {
    pub fn record(&mut self, game: &GameRecord) {
        match game.winner {
            Some(Color::White) => self.white_wins += 1,
            Some(Color::Black) => self.black_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.white_wins + self.black_wins + self.draws
    }
}

impl fmt::Display for DuelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: white {} / black {} / draws {}",
            self.games(),
            self.white_wins,
            self.black_wins,
            self.draws
        )
    }
}

/// Plays every game of the duel in parallel. Each game owns its two engines.
pub fn run(args: &DuelArgs) -> Result<DuelSummary, Box<dyn Error>> {
    let start = match &args.fen {
        Some(fen) => fen
            .parse::<Board>()
            .map_err(|e| format!("Invalid FEN {:?}: {:?}", fen, e))?,
        None => Board::default(),
    };

    let mut config = EngineConfig::default();
    config.search_depth.value = args.depth;
    config.leaf_budget.value = args.leaf_budget;

    let white = EngineKind::from(args.white);
    let black = EngineKind::from(args.black);
    info!(
        "Duel: {} vs {}, {} games from {}",
        white.name(),
        black.name(),
        args.games,
        start
    );

    let records: Vec<GameRecord> = (0..args.games)
        .into_par_iter()
        .map(|game| -> Result<GameRecord, SearchError> {
            let (white_seed, black_seed) = game_seeds(args.seed, game);
            let mut white_engine = engine::create(white, &config.settings_for(white, white_seed))?;
            let mut black_engine = engine::create(black, &config.settings_for(black, black_seed))?;

            let record = play_game(
                white_engine.as_mut(),
                black_engine.as_mut(),
                start.clone(),
                args.max_plies,
            )?;
            info!(
                "Game {}: {:?} after {} plies ({:?})",
                game + 1,
                record.winner,
                record.plies(),
                record.outcome
            );
            Ok(record)
        })
        .collect::<Result<_, _>>()?;

    let mut summary = DuelSummary::default();
    for record in &records {
        summary.record(record);
    }
    Ok(summary)
}

fn game_seeds(base: Option<u64>, game: usize) -> (Option<u64>, Option<u64>) {
    match base {
        Some(seed) => {
            let offset = 2 * game as u64;
            (
                Some(seed.wrapping_add(offset)),
                Some(seed.wrapping_add(offset + 1)),
            )
        }
        None => (None, None),
    }
}

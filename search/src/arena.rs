use cozy_chess::{Board, Color};
use log::{debug, warn};
use uci::commands::GoParams;
use utils::{ChessMove, GameState, Outcome};

use crate::{Engine, SearchError};

/// A finished engine-vs-engine game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub white_name: String,
    pub black_name: String,
    pub moves: Vec<ChessMove>,
    /// `None` when the ply cap ended the game.
    pub outcome: Option<Outcome>,
    pub winner: Option<Color>,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Plays one game between two engines from `start`. Reaching `max_plies` is a draw.
pub fn play_game<'a>(
    white: &'a mut dyn Engine,
    black: &'a mut dyn Engine,
    start: Board,
    max_plies: usize,
) -> Result<GameRecord, SearchError> {
    let mut game = GameState::new(start);
    let params = GoParams::default();
    let mut moves = Vec::new();

    white.start();
    black.start();
    debug!("Starting game: {} vs {}", white.name(), black.name());

    while moves.len() < max_plies && game.legal_moves().is_some() {
        let engine = match game.side_to_move() {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        engine.set_position(game.current().clone(), game.history_hashes());
        let Some((mv, score)) = engine.best_move(&params, None)? else {
            warn!("{} returned no move in {}, ending the game", engine.name(), game.current());
            break;
        };
        debug!("{} plays {} ({})", engine.name(), mv, score);

        game.execute_move(&mv)?;
        moves.push(mv);
    }

    let outcome = game.outcome();
    let winner = match outcome {
        Some(Outcome::Checkmate) => Some(!game.side_to_move()),
        _ => None,
    };

    Ok(GameRecord {
        white_name: white.name(),
        black_name: black.name(),
        moves,
        outcome,
        winner,
    })
}

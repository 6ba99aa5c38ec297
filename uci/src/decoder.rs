use std::str::FromStr;

use cozy_chess::{util::parse_uci_move, Board};
use log::warn;

use super::commands::{GoParams, UciInput};

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> UciInput {
        match input {
            "uci" => UciInput::Uci,
            "isready" => UciInput::IsReady,
            "ucinewgame" => UciInput::UciNewGame,

            _ if input.starts_with("position") => self.decode_position(input),
            _ if input.starts_with("go") => self.decode_go(input),
            _ if input.starts_with("setoption") => self.decode_setoption(input),
            _ if input.starts_with("stop") => UciInput::Stop,
            _ if input.starts_with("quit") => UciInput::Quit,

            _ => UciInput::Unknown(input.to_string()),
        }
    }

    fn decode_position(&self, input: &str) -> UciInput {
        let (setup, moves) = match input.split_once("moves") {
            Some((setup, moves)) => (setup, Some(moves)),
            None => (input, None),
        };

        let mut board = match setup.split_once("fen") {
            Some((_, fen)) => match Board::from_str(fen.trim()) {
                Ok(board) => board,
                Err(e) => {
                    warn!("Rejecting position with invalid FEN {:?}: {:?}", fen.trim(), e);
                    return UciInput::Unknown(input.to_string());
                }
            },
            None => Board::default(), // Default to startpos
        };

        // Positions seen in the game, not including the current position.
        let mut game_history = Vec::new();

        for mv_str in moves.into_iter().flat_map(str::split_whitespace) {
            let before = board.hash();
            let played = parse_uci_move(&board, mv_str)
                .ok()
                .is_some_and(|mv| board.try_play(mv).is_ok());
            if !played {
                warn!("Ignoring illegal move {:?} and the rest of the move list", mv_str);
                break;
            }
            game_history.push(before);
        }

        UciInput::Position {
            board,
            game_history,
        }
    }

    fn decode_setoption(&self, input: &str) -> UciInput {
        // Parse: setoption name <name> [value <value>]
        let Some(rest) = input.strip_prefix("setoption name ") else {
            // Missing "name" keyword - return empty name for error handling
            return UciInput::SetOption {
                name: String::new(),
                value: String::new(),
            };
        };

        let (name, value) = match rest.split_once(" value ") {
            Some((n, v)) => (n.trim(), v.trim()),
            None => (rest.trim(), ""),
        };

        UciInput::SetOption {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn decode_go(&self, input: &str) -> UciInput {
        UciInput::Go(GoParams {
            depth: extract_numeric_param(input, "depth").and_then(|d| u8::try_from(d).ok()),
            move_time: extract_numeric_param(input, "movetime"),
        })
    }
}

fn extract_numeric_param(input: &str, param: &str) -> Option<u64> {
    input
        .split_whitespace()
        .collect::<Vec<&str>>()
        .windows(2)
        .find(|w| w[0] == param)
        .and_then(|w| w[1].parse().ok())
}

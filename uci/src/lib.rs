mod connection;
mod decoder;
mod encoder;
mod notation;
mod options;

pub mod commands;

pub use commands::{UciInput, UciOutput};
pub use connection::UciConnection;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use notation::pv_to_uci;
pub use options::{UciOption, UciOptionType};

/// Null move in UCI format, used when no legal move exists (e.g., checkmate).
/// Sent as the bestmove when the position has no legal moves.
pub const NULL_MOVE: &str = "0000";

use cozy_chess::Board;

#[derive(Debug)]
pub enum UciInput {
    Uci,
    IsReady,

    UciNewGame,
    Position {
        board: Board,
        /// Hashes of the positions played before `board`, oldest first.
        game_history: Vec<u64>,
    },
    Go(GoParams),

    Stop,
    Quit,
    SetOption {
        name: String,
        value: String,
    },
    Unknown(String),
}

#[derive(Debug)]
pub enum UciOutput {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    BestMove(String),
    Info(Info),
    Option(String),
    Raw(String),
}

#[derive(Debug, Default)]
pub struct Info {
    pub depth: u8,
    pub nodes: u32,
    pub nodes_per_second: u32,
    pub time: u32,
    pub pv: Vec<String>,
    pub score: Score,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Score {
    Centipawns(i32), // centipawns
    Mate(i32),       // Positive for mate-in-n, negative for mated-in-n
}

impl Default for Score {
    fn default() -> Self {
        Score::Centipawns(0)
    }
}

#[derive(Debug, Default, Clone)]
pub struct GoParams {
    // Search depth ply only. Overrides the configured depth for this search.
    pub depth: Option<u8>,

    // Time budget in milliseconds. Accepted but not enforced; send `stop` to cut a search short.
    pub move_time: Option<u64>,
}

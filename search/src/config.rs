use std::str::FromStr;

use uci::{UciOption, UciOptionType, UciOutput};

use crate::{SearchError, MAX_DEPTH};

pub const DEFAULT_TABLE_CAPACITY: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    AlphaBeta,
    Mcts,
    /// Captures first, then the frontmost, leftmost piece.
    Simple,
    /// Random moves, capturing half the time a capture exists.
    RandomAggressive,
}

impl EngineKind {
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::AlphaBeta => "AlphaBeta",
            EngineKind::Mcts => "MCTS",
            EngineKind::Simple => "Simple",
            EngineKind::RandomAggressive => "RandomAggressive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBetaSettings {
    pub search_depth: u8,
    pub table_capacity: usize,
}

impl Default for AlphaBetaSettings {
    fn default() -> Self {
        Self {
            search_depth: 4,
            table_capacity: DEFAULT_TABLE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MctsSettings {
    /// Select/expand/simulate/backpropagate iterations per decision.
    pub leaf_budget: u32,
    pub playouts_per_leaf: u32,
    /// Plies after which an unfinished playout counts as a draw.
    pub max_playout_steps: u32,
    /// Fixed seed for reproducible playouts; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for MctsSettings {
    fn default() -> Self {
        Self {
            leaf_budget: 1000,
            playouts_per_leaf: 1,
            max_playout_steps: 100,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSettings {
    AlphaBeta(AlphaBetaSettings),
    Mcts(MctsSettings),
    Simple,
    RandomAggressive { seed: Option<u64> },
}

impl EngineSettings {
    pub fn kind(&self) -> EngineKind {
        match self {
            EngineSettings::AlphaBeta(_) => EngineKind::AlphaBeta,
            EngineSettings::Mcts(_) => EngineKind::Mcts,
            EngineSettings::Simple => EngineKind::Simple,
            EngineSettings::RandomAggressive { .. } => EngineKind::RandomAggressive,
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        match self {
            EngineSettings::AlphaBeta(s) => {
                if s.search_depth == 0 || s.search_depth as usize > MAX_DEPTH {
                    return Err(SearchError::InvalidSettings(format!(
                        "search depth must be within 1..={}, got {}",
                        MAX_DEPTH, s.search_depth
                    )));
                }
                if s.table_capacity == 0 {
                    return Err(SearchError::InvalidSettings(
                        "transposition table capacity must be positive".to_string(),
                    ));
                }
            }
            EngineSettings::Mcts(s) => {
                if s.leaf_budget == 0 {
                    return Err(SearchError::InvalidSettings(
                        "leaf budget must be positive".to_string(),
                    ));
                }
                if s.playouts_per_leaf == 0 {
                    return Err(SearchError::InvalidSettings(
                        "playouts per leaf must be positive".to_string(),
                    ));
                }
            }
            EngineSettings::Simple | EngineSettings::RandomAggressive { .. } => {}
        }
        Ok(())
    }
}

macro_rules! define_config {
    ($(($field:ident: $type:ty, $uci_name:literal, $uci_type:expr, $default:expr)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct EngineConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for EngineConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        value: $default,
                        uci: UciOption { name: $uci_name, option_type: $uci_type },
                    },)*
                }
            }
        }

        impl EngineConfig {
            pub fn update_from_uci(&mut self, uci_name: &str, value: &str) -> Result<(), String> {
                match uci_name {
                    $($uci_name => self.$field.update_from_uci(value),)*
                    _ => Err(format!("Unknown parameter: {}", uci_name)),
                }
            }

            pub fn to_uci(
                &self,
                output: &std::sync::mpsc::Sender<UciOutput>,
            ) -> Result<(), std::sync::mpsc::SendError<UciOutput>> {
                $(output.send(UciOutput::Option(self.$field.to_uci()))?;)*
                Ok(())
            }
        }
    };
}

define_config!(
    // Alpha-beta
    (search_depth: u8, "Search Depth", UciOptionType::Spin { min: 1, max: MAX_DEPTH as i64 }, 4),
    (table_capacity: usize, "Hash Entries", UciOptionType::Spin { min: 1, max: 10_000_000 }, DEFAULT_TABLE_CAPACITY),

    // Monte-Carlo tree search
    (leaf_budget: u32, "Leaf Budget", UciOptionType::Spin { min: 1, max: 1_000_000 }, 1000),
    (playouts_per_leaf: u32, "Playouts Per Leaf", UciOptionType::Spin { min: 1, max: 100 }, 1),
    (max_playout_steps: u32, "Max Playout Steps", UciOptionType::Spin { min: 0, max: 10_000 }, 100),
);

impl EngineConfig {
    pub fn alpha_beta_settings(&self) -> AlphaBetaSettings {
        AlphaBetaSettings {
            search_depth: self.search_depth.value,
            table_capacity: self.table_capacity.value,
        }
    }

    pub fn mcts_settings(&self, seed: Option<u64>) -> MctsSettings {
        MctsSettings {
            leaf_budget: self.leaf_budget.value,
            playouts_per_leaf: self.playouts_per_leaf.value,
            max_playout_steps: self.max_playout_steps.value,
            seed,
        }
    }

    pub fn settings_for(&self, kind: EngineKind, seed: Option<u64>) -> EngineSettings {
        match kind {
            EngineKind::AlphaBeta => EngineSettings::AlphaBeta(self.alpha_beta_settings()),
            EngineKind::Mcts => EngineSettings::Mcts(self.mcts_settings(seed)),
            EngineKind::Simple => EngineSettings::Simple,
            EngineKind::RandomAggressive => EngineSettings::RandomAggressive { seed },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub value: T,
    pub uci: UciOption,
}

impl<T> ConfigParam<T>
where
    T: FromStr + ToString + Clone,
    T::Err: std::fmt::Display,
{
    pub fn update_from_uci(&mut self, value: &str) -> Result<(), String> {
        self.uci.option_type.validate(value)?;

        let new_value = value
            .trim()
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;

        self.value = new_value;
        Ok(())
    }

    pub fn to_uci(&self) -> String {
        self.uci.option_type.to_uci(self.uci.name, &self.value)
    }
}

use ahash::AHashMap;
use log::warn;
use utils::ChessMove;

/// Indicates whether the stored value is exact or a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// True minimax value (alpha < value < beta)
    Exact,
    /// Value >= beta (beta cutoff)
    Lower,
    /// Value <= alpha (all moves failed)
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// Score from searching this position
    pub value: i32,
    /// Remaining depth that produced this result
    pub depth: u8,
    pub bound: Bound,
    /// Best move found, if any move raised alpha or caused the cutoff
    pub best_move: Option<ChessMove>,
}

/// Capacity-capped cache keyed by position fingerprint.
///
/// Stores always overwrite. When full, storing a new key first evicts one
/// arbitrary entry; there is no depth or age preference.
///
/// <https://www.chessprogramming.org/Transposition_Table>
pub struct TranspositionTable {
    entries: AHashMap<String, TTEntry>,
    capacity: usize,
    saturated: bool,
}

impl TranspositionTable {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: AHashMap::with_capacity(capacity.min(1 << 16)),
            capacity,
            saturated: false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.saturated = false;
    }

    /// Cached value usable for the window `[alpha, beta]` at `depth`, if any.
    #[inline(always)]
    pub fn lookup(&self, key: &str, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(key)?;
        if entry.depth < depth {
            return None;
        }

        match entry.bound {
            Bound::Exact => Some(entry.value),
            Bound::Lower if entry.value >= beta => Some(entry.value),
            Bound::Upper if entry.value <= alpha => Some(entry.value),
            _ => None,
        }
    }

    pub fn store(
        &mut self,
        key: String,
        value: i32,
        depth: u8,
        bound: Bound,
        best_move: Option<ChessMove>,
    ) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            if !self.saturated {
                warn!(
                    "Transposition table reached its capacity of {} entries, evicting",
                    self.capacity
                );
                self.saturated = true;
            }
            if let Some(victim) = self.entries.keys().next().cloned() {
                self.entries.remove(&victim);
            }
        }

        self.entries.insert(
            key,
            TTEntry {
                value,
                depth,
                bound,
                best_move,
            },
        );
    }

    #[inline(always)]
    pub fn entry(&self, key: &str) -> Option<&TTEntry> {
        self.entries.get(key)
    }

    #[inline(always)]
    pub fn best_move(&self, key: &str) -> Option<ChessMove> {
        self.entries.get(key).and_then(|entry| entry.best_move)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

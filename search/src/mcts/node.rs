use utils::ChessMove;

/// Index into the `SearchTree` node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub(super) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub parent: Option<NodeId>,
    /// The move that led here; `None` only for a freshly created root.
    pub mv: Option<ChessMove>,
    pub children: Vec<NodeId>,
    pub visits: u32,
    /// Sum of playout results, seen by the side that played `mv`.
    pub score: f64,
}

impl Node {
    pub fn new(parent: Option<NodeId>, mv: Option<ChessMove>) -> Self {
        Self {
            parent,
            mv,
            children: Vec::new(),
            visits: 0,
            score: 0.0,
        }
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline(always)]
    pub fn mean_score(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / self.visits as f64
        }
    }

    /// UCB1 with exploration constant sqrt(2). Unvisited nodes always go first.
    #[inline(always)]
    pub fn ucb(&self, parent_visits: u32) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let visits = self.visits as f64;
        self.mean_score() + (2.0 * (parent_visits as f64).ln() / visits).sqrt()
    }
}

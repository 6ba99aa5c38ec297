use std::collections::VecDeque;

use cozy_chess::Board;
use utils::{make_move, ChessMove};

use super::node::{Node, NodeId};

/// Arena-allocated search tree. The root is always `NodeId::ROOT`.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
    /// Position at the root.
    board: Board,
}

impl SearchTree {
    pub fn new(board: Board) -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(Node::new(None, None));
        Self { nodes, board }
    }

    #[inline(always)]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Adds one child per move under `id`, in move order.
    pub fn expand(&mut self, id: NodeId, moves: &[ChessMove]) {
        for &mv in moves {
            let child = NodeId::from_index(self.nodes.len());
            self.nodes.push(Node::new(Some(id), Some(mv)));
            self.get_mut(id).children.push(child);
        }
    }

    /// Child with the highest UCB1 value, the first one on ties.
    pub fn select_child(&self, id: NodeId) -> Option<NodeId> {
        let parent_visits = self.get(id).visits;
        self.first_max_by(id, |node| node.ucb(parent_visits))
    }

    /// Visited child with the best mean score, the first one on ties.
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        self.first_max_by(id, |node| {
            if node.visits == 0 {
                f64::NEG_INFINITY
            } else {
                node.mean_score()
            }
        })
        .filter(|&child| self.get(child).visits > 0)
    }

    fn first_max_by<F>(&self, id: NodeId, value: F) -> Option<NodeId>
    where
        F: Fn(&Node) -> f64,
    {
        let mut best: Option<(NodeId, f64)> = None;
        for &child in &self.get(id).children {
            let v = value(self.get(child));
            if best.map_or(true, |(_, best_value)| v > best_value) {
                best = Some((child, v));
            }
        }
        best.map(|(child, _)| child)
    }

    /// Adds `score` to `from` and its ancestors, flipping the sign at every level.
    pub fn backpropagate(&mut self, from: NodeId, mut score: f64) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            node.score += score;
            score = -score;
            current = node.parent;
        }
    }

    /// Finds `board` at the root or within two plies below it.
    pub fn find(&self, board: &Board) -> Option<NodeId> {
        let target = board.hash();
        if self.board.hash() == target {
            return Some(self.root());
        }

        let mut frontier = vec![(self.root(), self.board.clone())];
        for _ in 0..2 {
            let mut next = Vec::new();
            for (id, position) in &frontier {
                for &child in &self.get(*id).children {
                    let Some(mv) = self.get(child).mv else {
                        continue;
                    };
                    let after = make_move(position, mv.to_cozy());
                    if after.hash() == target {
                        return Some(child);
                    }
                    next.push((child, after));
                }
            }
            frontier = next;
        }
        None
    }

    /// Makes `new_root` the root, keeping only its subtree.
    ///
    /// The arena is rebuilt breadth-first so the new root lands at index 0 and
    /// sibling order is preserved. `board` is the position at `new_root`.
    pub fn reroot(&mut self, new_root: NodeId, board: Board) {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut queue: VecDeque<(NodeId, Option<NodeId>)> = VecDeque::from([(new_root, None)]);

        while let Some((old_id, parent)) = queue.pop_front() {
            let old = &self.nodes[old_id.index()];
            let id = NodeId::from_index(nodes.len());
            nodes.push(Node {
                parent,
                mv: old.mv,
                children: Vec::with_capacity(old.children.len()),
                visits: old.visits,
                score: old.score,
            });
            if let Some(parent) = parent {
                nodes[parent.index()].children.push(id);
            }
            queue.extend(old.children.iter().map(|&child| (child, Some(id))));
        }

        self.nodes = nodes;
        self.board = board;
    }
}

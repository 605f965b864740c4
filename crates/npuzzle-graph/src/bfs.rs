//! Shortest-path queries over a built [`StateGraph`].

use std::collections::VecDeque;

use npuzzle_core::Board;

use crate::graph::{NodeId, StateGraph};

const UNSEEN: u32 = u32::MAX;

impl StateGraph {
    /// The minimum-length sequence of boards from `from` to `to`, both
    /// endpoints included, or `None` if no path connects them in the built
    /// graph.
    ///
    /// Every move costs 1, so a strictly FIFO frontier finds cheapest paths
    /// in insertion order. Visitation state is a per-query parent array
    /// rather than a flag on shared nodes, so repeated queries against one
    /// graph are independent and a fully built graph can serve concurrent
    /// read-only queries.
    ///
    /// `None` is a normal outcome ("these states are not connected by legal
    /// moves"), not an error. When several shortest paths exist, which one
    /// is returned follows frontier order and is not a guarantee; only the
    /// length is.
    pub fn shortest_path(&self, from: NodeId, to: NodeId) -> Option<Vec<Board>> {
        if from == to {
            return Some(vec![self.board(from).clone()]);
        }

        // parent doubles as the visited set: UNSEEN means undiscovered.
        let mut parent = vec![UNSEEN; self.len()];
        parent[from.index()] = from.0;

        let mut frontier: VecDeque<NodeId> = VecDeque::from([from]);
        while let Some(id) = frontier.pop_front() {
            for &next in self.neighbors(id) {
                if parent[next.index()] != UNSEEN {
                    continue;
                }
                parent[next.index()] = id.0;
                if next == to {
                    return Some(self.reconstruct(&parent, from, to));
                }
                frontier.push_back(next);
            }
        }
        None
    }

    /// Walk the parent links back from `to` and return the boards in
    /// source-to-destination order.
    fn reconstruct(&self, parent: &[u32], from: NodeId, to: NodeId) -> Vec<Board> {
        let mut path = Vec::new();
        let mut current = to;
        loop {
            path.push(self.board(current).clone());
            if current == from {
                break;
            }
            current = NodeId(parent[current.index()]);
        }
        path.reverse();
        path
    }
}

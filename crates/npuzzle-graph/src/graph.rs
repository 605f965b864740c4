//! The [`StateGraph`] — interned board states and their one-move relation.

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use npuzzle_core::{Adjacency, Board, Dims};

/// Handle to an interned board state within a [`StateGraph`].
///
/// Node relationships are stored as handles into the graph's arena rather
/// than as references, so the cyclic move graph needs no reference cycles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in the graph's arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct NodeRecord {
    board: Board,
    neighbors: Vec<NodeId>,
    expanded: bool,
}

/// The set of board states discovered from a source, plus the one-move
/// relation between them.
///
/// The graph owns the interning table: [`node`](StateGraph::node) is the
/// single authority for node identity, so no two nodes ever wrap equal
/// boards. States are discovered lazily — [`build_all`](StateGraph::build_all)
/// expands the entire reachable set, [`build_until`](StateGraph::build_until)
/// stops as soon as a destination surfaces.
///
/// Building mutates the graph and is single-threaded; afterwards every query
/// takes `&self`, so a built graph can be shared read-only.
pub struct StateGraph {
    dims: Dims,
    adj: Rc<Adjacency>,
    nodes: Vec<NodeRecord>,
    index: HashMap<Board, NodeId>,
}

impl StateGraph {
    /// Create an empty graph for boards of the given shape.
    pub fn new(dims: Dims) -> Self {
        Self::with_adjacency(Rc::new(Adjacency::new(dims)))
    }

    /// Create an empty graph sharing an existing adjacency table
    /// (see `npuzzle_core::AdjacencyCache`).
    pub fn with_adjacency(adj: Rc<Adjacency>) -> Self {
        Self {
            dims: adj.dims(),
            adj,
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The board shape this graph holds states of.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of interned states.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no state has been interned yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node for `board`, interning a new unexpanded one if the state has
    /// not been seen. Idempotent under board equality.
    ///
    /// `board` must match the graph's shape; handing in a different shape is
    /// a caller bug.
    pub fn node(&mut self, board: &Board) -> NodeId {
        debug_assert_eq!(board.dims(), self.dims, "board shape mismatch");
        if let Some(&id) = self.index.get(board) {
            return id;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeRecord {
            board: board.clone(),
            neighbors: Vec::new(),
            expanded: false,
        });
        self.index.insert(board.clone(), id);
        id
    }

    /// The node for `board` if that state has been interned.
    #[inline]
    pub fn get(&self, board: &Board) -> Option<NodeId> {
        self.index.get(board).copied()
    }

    /// The board wrapped by a node.
    #[inline]
    pub fn board(&self, id: NodeId) -> &Board {
        &self.nodes[id.index()].board
    }

    /// The states one legal move away from `id`. Empty until the node is
    /// expanded.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].neighbors
    }

    /// Whether the node's successors have been generated. Tracked as an
    /// explicit flag so a state with zero legal moves still counts as
    /// expanded.
    #[inline]
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.nodes[id.index()].expanded
    }

    /// Generate and intern the legal successors of `id`, recording them as
    /// its neighbors. Skipped if the node is already expanded, which
    /// guarantees termination over the finite state space.
    pub fn expand(&mut self, id: NodeId) {
        if self.nodes[id.index()].expanded {
            return;
        }
        let successors = self.nodes[id.index()].board.legal_successors(&self.adj);
        let neighbors: Vec<NodeId> = successors.iter().map(|b| self.node(b)).collect();
        let record = &mut self.nodes[id.index()];
        record.neighbors = neighbors;
        record.expanded = true;
    }

    /// Expand every state reachable from `source` and return its node.
    ///
    /// Worklist traversal: pop a pending node, expand it if needed, queue
    /// its successors. Terminates when the worklist empties, at which point
    /// the graph is the full reachable set. Use this when many destinations
    /// will be queried against one source.
    pub fn build_all(&mut self, source: &Board) -> NodeId {
        let src = self.node(source);
        let mut pending: VecDeque<NodeId> = VecDeque::from([src]);
        while let Some(id) = pending.pop_front() {
            if self.nodes[id.index()].expanded {
                continue;
            }
            self.expand(id);
            pending.extend(
                self.nodes[id.index()]
                    .neighbors
                    .iter()
                    .copied()
                    .filter(|n| !self.nodes[n.index()].expanded),
            );
        }
        log::debug!("state graph: {} states reachable from source", self.len());
        src
    }

    /// Like [`build_all`](StateGraph::build_all), but stop as soon as
    /// `destination` is interned — that is, as soon as it is discovered as a
    /// successor of some expanded state. It need not itself be expanded.
    ///
    /// Returns the source node and, if the destination was discovered, its
    /// node. The resulting graph is a superset of the subgraph connecting
    /// the two states but never larger than the reachable set.
    ///
    /// The worklist is processed first-in-first-out, so states are expanded
    /// in nondecreasing distance from the source; when the destination
    /// surfaces, some minimum-length path already runs entirely through
    /// expanded states, and a search over the partial graph finds the same
    /// minimum as over the full one.
    pub fn build_until(&mut self, source: &Board, destination: &Board) -> (NodeId, Option<NodeId>) {
        let src = self.node(source);
        if let Some(dst) = self.get(destination) {
            return (src, Some(dst));
        }
        let mut expansions = 0usize;
        let mut pending: VecDeque<NodeId> = VecDeque::from([src]);
        while let Some(id) = pending.pop_front() {
            if self.nodes[id.index()].expanded {
                continue;
            }
            self.expand(id);
            expansions += 1;
            if let Some(dst) = self.get(destination) {
                log::debug!(
                    "destination interned after {expansions} expansions ({} states)",
                    self.len()
                );
                return (src, Some(dst));
            }
            pending.extend(
                self.nodes[id.index()]
                    .neighbors
                    .iter()
                    .copied()
                    .filter(|n| !self.nodes[n.index()].expanded),
            );
        }
        log::debug!(
            "destination not reachable: {} states exhausted after {expansions} expansions",
            self.len()
        );
        (src, None)
    }
}

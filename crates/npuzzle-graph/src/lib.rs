//! **npuzzle-graph** — state-space graphs and shortest slide sequences.
//!
//! Boards from `npuzzle-core` become interned nodes of a [`StateGraph`];
//! the graph lazily discovers every state reachable from a source
//! ([`StateGraph::build_all`]) or just enough of them to connect a source to
//! a destination ([`StateGraph::build_until`]), then answers minimum-move
//! queries with a uniform-cost frontier search
//! ([`StateGraph::shortest_path`]).
//!
//! For the common one-shot case, [`solve`] builds a bounded graph and
//! searches it in a single call.

mod bfs;
mod graph;
mod solve;

pub use graph::{NodeId, StateGraph};
pub use solve::{SolveError, solve};

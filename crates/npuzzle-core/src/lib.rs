//! **npuzzle-core** — sliding-tile puzzle board model.
//!
//! This crate provides the value types shared across the *npuzzle*
//! workspace: grid geometry, tiles, immutable boards with legal-move
//! generation, shared adjacency tables, and an optional factorial-base
//! permutation code.
//!
//! The state graph and shortest-path search live in `npuzzle-graph`.

pub mod adjacency;
pub mod board;
pub mod code;
pub mod geom;
pub mod tile;

pub use adjacency::{Adjacency, AdjacencyCache};
pub use board::{Board, BoardError};
pub use code::{CodeError, MAX_CELLS, decode, encode};
pub use geom::{Dims, Location};
pub use tile::Tile;

//! Precomputed neighbor tables shared by every board of one shape.

use std::collections::HashMap;
use std::rc::Rc;

use crate::geom::{Dims, Location};

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

/// The 4-neighbor adjacency table for one board shape.
///
/// Built once per [`Dims`] and read-only afterwards, so a single table can
/// back every board and state graph of that shape. Move generation looks up
/// the blank's neighbors here instead of recomputing geometry per move.
#[derive(Debug, Clone)]
pub struct Adjacency {
    dims: Dims,
    table: Vec<Vec<Location>>,
}

impl Adjacency {
    /// Build the table for `dims`.
    pub fn new(dims: Dims) -> Self {
        let table = dims.iter().map(|loc| dims.adjacent(loc).collect()).collect();
        Self { dims, table }
    }

    /// The shape this table was built for.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The in-bounds orthogonal neighbors of `loc`.
    #[inline]
    pub fn neighbors(&self, loc: Location) -> &[Location] {
        &self.table[self.dims.index_of(loc)]
    }
}

// ---------------------------------------------------------------------------
// AdjacencyCache
// ---------------------------------------------------------------------------

/// A dims-keyed cache of shared [`Adjacency`] tables.
///
/// An explicitly owned context object rather than a process-wide global, so
/// independent graphs and shapes can coexist without interference. `get`
/// builds a table on first use and hands out `Rc` clones afterwards.
#[derive(Debug, Default)]
pub struct AdjacencyCache {
    tables: HashMap<Dims, Rc<Adjacency>>,
}

impl AdjacencyCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared table for `dims`, building it on first use.
    pub fn get(&mut self, dims: Dims) -> Rc<Adjacency> {
        Rc::clone(
            self.tables
                .entry(dims)
                .or_insert_with(|| Rc::new(Adjacency::new(dims))),
        )
    }
}

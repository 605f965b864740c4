//! Factorial-base (Lehmer) codes for boards.
//!
//! A valid board over `n` cells is a permutation of the tile universe
//! `Tile(0)..Tile(n)`, so it packs into a single integer below `n!`. The
//! code is an auxiliary storage/transmission format; nothing in the graph or
//! search layers depends on it.

use std::fmt;

use crate::board::Board;
use crate::geom::Dims;
use crate::tile::Tile;

/// Largest cell count whose codes fit in a `u64` (`20! < 2^64 <= 21!`).
pub const MAX_CELLS: usize = 20;

/// Errors that can occur when encoding or decoding a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// The board shape has more cells than a `u64` code can carry.
    TooLarge { cells: usize },
    /// The code is not below `cells!`.
    OutOfRange { code: u64 },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { cells } => {
                write!(f, "{cells} cells exceed the {MAX_CELLS}-cell code limit")
            }
            Self::OutOfRange { code } => write!(f, "code {code} does not denote a permutation"),
        }
    }
}

impl std::error::Error for CodeError {}

/// Encode a valid board as its Lehmer code.
///
/// The tile ordering fixed by the code is the numeric order of the tile
/// universe, so [`decode`] round-trips exactly for every valid board.
pub fn encode(board: &Board) -> Result<u64, CodeError> {
    let tiles = board.tiles();
    let n = tiles.len();
    if n > MAX_CELLS {
        return Err(CodeError::TooLarge { cells: n });
    }
    debug_assert!(board.is_valid(), "encoding requires a valid board");

    let mut code: u64 = 0;
    for (i, &tile) in tiles.iter().enumerate() {
        let rank = tiles[i + 1..].iter().filter(|t| **t < tile).count();
        code = code * (n - i) as u64 + rank as u64;
    }
    Ok(code)
}

/// Decode a Lehmer code back into the board of shape `dims`.
///
/// Fails if the shape exceeds [`MAX_CELLS`] or the code is not below
/// `cells!`. Every successful decode yields a valid board.
pub fn decode(code: u64, dims: Dims) -> Result<Board, CodeError> {
    let n = dims.len();
    if n > MAX_CELLS {
        return Err(CodeError::TooLarge { cells: n });
    }
    let cardinality = (1..=n as u64).product::<u64>();
    if code >= cardinality {
        return Err(CodeError::OutOfRange { code });
    }

    // Mixed-radix digits, least-significant (radix 1) last.
    let mut digits = vec![0usize; n];
    let mut rest = code;
    for i in (0..n).rev() {
        let radix = (n - i) as u64;
        digits[i] = (rest % radix) as usize;
        rest /= radix;
    }

    // Each digit selects the digit-th smallest tile still unplaced.
    let mut pool: Vec<Tile> = (0..n as u16).map(Tile).collect();
    let tiles = digits.into_iter().map(|d| pool.remove(d)).collect();
    Ok(Board::from_parts(dims, tiles))
}

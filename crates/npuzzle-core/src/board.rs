//! The [`Board`] type — an immutable assignment of tiles to grid cells.

use std::fmt;

use rand::{Rng, RngExt};

use crate::adjacency::Adjacency;
use crate::geom::{Dims, Location};
use crate::tile::Tile;

// ---------------------------------------------------------------------------
// BoardError
// ---------------------------------------------------------------------------

/// Errors that can occur when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The grid has no cells.
    Empty,
    /// A row is shorter or longer than the first row.
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A tile value outside `0..cells` was supplied.
    TileOutOfRange { tile: Tile, cells: usize },
    /// The same tile value appears more than once.
    DuplicateTile { tile: Tile },
    /// The grid exceeds the supported coordinate range.
    TooLarge { cols: usize, rows: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board has no cells"),
            Self::Ragged { row, len, expected } => {
                write!(f, "row {row} has {len} cells, expected {expected}")
            }
            Self::TileOutOfRange { tile, cells } => {
                write!(f, "tile {tile} outside universe 0..{cells}")
            }
            Self::DuplicateTile { tile } => write!(f, "tile {tile} appears more than once"),
            Self::TooLarge { cols, rows } => {
                write!(f, "grid {cols}x{rows} exceeds supported coordinate range")
            }
        }
    }
}

impl std::error::Error for BoardError {}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A complete assignment of tiles to the cells of a rectangular grid, with
/// exactly one blank.
///
/// Boards are immutable values: every "mutation" ([`with_swap`](Board::with_swap),
/// [`legal_successors`](Board::legal_successors)) produces a new board, so
/// boards can serve as map keys and be compared across graph queries without
/// aliasing hazards. Equality and hashing cover the full tile sequence plus
/// the shape.
///
/// Construction through [`from_rows`](Board::from_rows) validates its input,
/// so every board obtained from the public API upholds the tile-universe
/// invariant; operations that assume it (such as locating the blank) treat a
/// violation as a programming error and panic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    dims: Dims,
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a board from a grid of rows.
    ///
    /// Rejects empty and ragged grids, tiles outside the `0..cells`
    /// universe, and duplicate tiles. The blank ([`Tile::BLANK`]) is part of
    /// the universe, so exactly one blank is implied by the cover check.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Board, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(BoardError::Empty);
        }
        if width > u16::MAX as usize || height > u16::MAX as usize {
            return Err(BoardError::TooLarge {
                cols: width,
                rows: height,
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::Ragged {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
        }

        let dims = Dims::new(width as u16, height as u16);
        let tiles: Vec<Tile> = rows.into_iter().flatten().collect();

        let mut seen = vec![false; tiles.len()];
        for &tile in &tiles {
            let Some(slot) = seen.get_mut(tile.0 as usize) else {
                return Err(BoardError::TileOutOfRange {
                    tile,
                    cells: tiles.len(),
                });
            };
            if *slot {
                return Err(BoardError::DuplicateTile { tile });
            }
            *slot = true;
        }

        Ok(Board { dims, tiles })
    }

    /// Convenience constructor from numeric rows (`0` is the blank).
    pub fn from_values(rows: &[&[u16]]) -> Result<Board, BoardError> {
        Board::from_rows(
            rows.iter()
                .map(|row| row.iter().copied().map(Tile).collect())
                .collect(),
        )
    }

    /// The canonical solved board: tiles `1..cells` in row-major order with
    /// the blank in the last cell.
    pub fn solved(dims: Dims) -> Board {
        assert!(!dims.is_empty(), "solved board needs at least one cell");
        let len = dims.len();
        let mut tiles: Vec<Tile> = (1..len as u16).map(Tile).collect();
        tiles.push(Tile::BLANK);
        Board { dims, tiles }
    }

    /// Internal constructor for callers that produce the tile sequence
    /// directly (decoding, scrambling). The sequence must be a permutation
    /// of the tile universe.
    pub(crate) fn from_parts(dims: Dims, tiles: Vec<Tile>) -> Board {
        debug_assert_eq!(tiles.len(), dims.len());
        Board { dims, tiles }
    }

    /// The board's shape.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Whether the tiles are exactly the `0..cells` universe, each once.
    ///
    /// Boards built through [`from_rows`](Board::from_rows) always satisfy
    /// this; the check exists for representations that can transiently
    /// violate it (test scaffolding, hand-assembled grids).
    pub fn is_valid(&self) -> bool {
        let mut seen = vec![false; self.tiles.len()];
        for &tile in &self.tiles {
            match seen.get_mut(tile.0 as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// The tile at `loc`.
    ///
    /// # Panics
    /// Panics if `loc` is out of bounds.
    #[inline]
    pub fn tile_at(&self, loc: Location) -> Tile {
        self.tiles[self.dims.index_of(loc)]
    }

    /// The location of the blank.
    ///
    /// # Panics
    /// Panics if the board has no blank, which a validly constructed board
    /// never does.
    pub fn blank(&self) -> Location {
        let idx = self
            .tiles
            .iter()
            .position(|t| t.is_blank())
            .expect("board has no blank tile");
        self.dims.location_of(idx)
    }

    /// A new board with the tiles at `a` and `b` exchanged. `self` is
    /// unmodified.
    pub fn with_swap(&self, a: Location, b: Location) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.dims.index_of(a), self.dims.index_of(b));
        Board {
            dims: self.dims,
            tiles,
        }
    }

    /// Every board reachable from `self` by one legal move: one successor
    /// per neighbor of the blank, each a blank↔neighbor swap.
    ///
    /// The order of the returned boards is not semantic.
    pub fn legal_successors(&self, adj: &Adjacency) -> Vec<Board> {
        debug_assert_eq!(adj.dims(), self.dims, "adjacency table shape mismatch");
        let blank = self.blank();
        adj.neighbors(blank)
            .iter()
            .map(|&n| self.with_swap(blank, n))
            .collect()
    }

    /// Row-major view of one row of tiles.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.dims.cols as usize)
    }

    /// The full tile sequence in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    // -----------------------------------------------------------------------
    // Parity
    // -----------------------------------------------------------------------

    /// The move-invariant parity class of this board.
    ///
    /// A horizontal slide permutes nothing besides the blank; a vertical
    /// slide performs `cols - 1` adjacent transpositions of the non-blank
    /// sequence and shifts the blank one row. Inversions-plus-blank-row is
    /// therefore invariant when `cols` is even, plain inversion count when
    /// `cols` is odd.
    pub fn parity(&self) -> u8 {
        let mut inversions = 0usize;
        for (i, &a) in self.tiles.iter().enumerate() {
            if a.is_blank() {
                continue;
            }
            inversions += self.tiles[i + 1..]
                .iter()
                .filter(|b| !b.is_blank() && **b < a)
                .count();
        }
        if self.dims.cols % 2 == 1 {
            (inversions % 2) as u8
        } else {
            ((inversions + self.blank().row as usize) % 2) as u8
        }
    }

    /// Whether `other` lies in the same parity class as `self`.
    ///
    /// Equal parity is necessary for mutual reachability, and sufficient on
    /// boards with at least two columns and two rows. On single-row or
    /// single-column boards moves cannot reorder tiles at all, so equal
    /// parity does not imply a path exists.
    pub fn solvable_from(&self, other: &Board) -> bool {
        self.dims == other.dims && self.parity() == other.parity()
    }

    // -----------------------------------------------------------------------
    // Scrambling
    // -----------------------------------------------------------------------

    /// A uniformly random valid board of the given shape.
    ///
    /// The result may fall in either parity class; use
    /// [`scramble_moves`](Board::scramble_moves) for a board guaranteed
    /// reachable from a given source.
    pub fn scrambled<R: Rng>(dims: Dims, rng: &mut R) -> Board {
        assert!(!dims.is_empty(), "scrambled board needs at least one cell");
        let mut tiles: Vec<Tile> = (0..dims.len() as u16).map(Tile).collect();
        for i in (1..tiles.len()).rev() {
            let j = rng.random_range(0..=i);
            tiles.swap(i, j);
        }
        Board { dims, tiles }
    }

    /// The board reached by applying `moves` random legal moves to `self`.
    ///
    /// Stays within the source's parity class by construction.
    pub fn scramble_moves<R: Rng>(&self, adj: &Adjacency, moves: usize, rng: &mut R) -> Board {
        let mut current = self.clone();
        for _ in 0..moves {
            let blank = current.blank();
            let neighbors = adj.neighbors(blank);
            if neighbors.is_empty() {
                break;
            }
            let pick = neighbors[rng.random_range(0..neighbors.len())];
            current = current.with_swap(blank, pick);
        }
        current
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len().saturating_sub(1)).to_string().len();
        let mut first = true;
        for row in self.rows() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            for (i, tile) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{tile:>width$}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved3() -> Board {
        Board::solved(Dims::new(3, 3))
    }

    // -----------------------------------------------------------------------
    // Construction & validity
    // -----------------------------------------------------------------------

    #[test]
    fn from_values_matches_solved() {
        let board = Board::from_values(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]).unwrap();
        assert_eq!(board, solved3());
        assert!(board.is_valid());
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(Board::from_values(&[]), Err(BoardError::Empty));
        assert_eq!(Board::from_values(&[&[]]), Err(BoardError::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Board::from_values(&[&[1, 2, 3], &[4, 5]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::Ragged {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn rejects_duplicate_tile() {
        let err = Board::from_values(&[&[1, 2], &[1, 0]]).unwrap_err();
        assert_eq!(err, BoardError::DuplicateTile { tile: Tile(1) });
    }

    #[test]
    fn rejects_tile_out_of_range() {
        // Missing blank shows up as a value outside the universe.
        let err = Board::from_values(&[&[1, 2], &[3, 4]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::TileOutOfRange {
                tile: Tile(4),
                cells: 4
            }
        );
    }

    #[test]
    fn solved_places_blank_last() {
        let board = solved3();
        assert_eq!(board.blank(), Location::new(2, 2));
        assert_eq!(board.tile_at(Location::new(0, 0)), Tile(1));
        assert_eq!(board.tile_at(Location::new(1, 2)), Tile(8));
    }

    // -----------------------------------------------------------------------
    // Moves
    // -----------------------------------------------------------------------

    #[test]
    fn with_swap_leaves_source_unmodified() {
        let board = solved3();
        let a = Location::new(2, 2);
        let b = Location::new(2, 1);
        let swapped = board.with_swap(a, b);
        assert_eq!(board, solved3());
        assert_eq!(swapped.tile_at(a), Tile(6));
        assert_eq!(swapped.tile_at(b), Tile::BLANK);
        assert!(swapped.is_valid());
    }

    #[test]
    fn successor_count_matches_blank_neighbors() {
        let adj = Adjacency::new(Dims::new(3, 3));
        // Blank in a corner: 2 moves.
        assert_eq!(solved3().legal_successors(&adj).len(), 2);
        // Blank in the center: 4 moves.
        let center = Board::from_values(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]).unwrap();
        assert_eq!(center.legal_successors(&adj).len(), 4);
        // Blank on an edge: 3 moves.
        let edge = Board::from_values(&[&[1, 0, 2], &[3, 4, 5], &[6, 7, 8]]).unwrap();
        assert_eq!(edge.legal_successors(&adj).len(), 3);
    }

    #[test]
    fn successors_are_valid_one_move_boards() {
        let adj = Adjacency::new(Dims::new(3, 3));
        let board = solved3();
        for succ in board.legal_successors(&adj) {
            assert!(succ.is_valid());
            assert!(board.blank().is_adjacent(succ.blank()));
            // Exactly the blank and one tile changed places.
            let differing = board
                .dims()
                .iter()
                .filter(|&loc| board.tile_at(loc) != succ.tile_at(loc))
                .count();
            assert_eq!(differing, 2);
        }
    }

    #[test]
    fn one_by_one_board_has_no_successors() {
        let dims = Dims::new(1, 1);
        let adj = Adjacency::new(dims);
        let board = Board::solved(dims);
        assert!(board.legal_successors(&adj).is_empty());
    }

    // -----------------------------------------------------------------------
    // Parity
    // -----------------------------------------------------------------------

    #[test]
    fn parity_is_invariant_under_legal_moves() {
        let adj = Adjacency::new(Dims::new(3, 3));
        let start = Board::from_values(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]).unwrap();
        for succ in start.legal_successors(&adj) {
            assert_eq!(start.parity(), succ.parity());
        }
        // Even column count exercises the blank-row term.
        let adj4 = Adjacency::new(Dims::new(4, 2));
        let start4 = Board::from_values(&[&[1, 2, 3, 4], &[5, 0, 6, 7]]).unwrap();
        for succ in start4.legal_successors(&adj4) {
            assert_eq!(start4.parity(), succ.parity());
        }
    }

    #[test]
    fn swapped_pair_is_opposite_parity() {
        let swapped = Board::from_values(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]).unwrap();
        assert!(!solved3().solvable_from(&swapped));
    }

    #[test]
    fn one_move_board_is_same_parity() {
        let one_move = Board::from_values(&[&[1, 2, 3], &[4, 5, 0], &[7, 8, 6]]).unwrap();
        assert!(solved3().solvable_from(&one_move));
    }

    #[test]
    fn different_shapes_are_never_solvable_from() {
        let a = Board::solved(Dims::new(2, 2));
        let b = Board::solved(Dims::new(2, 3));
        assert!(!a.solvable_from(&b));
    }

    // -----------------------------------------------------------------------
    // Scrambling
    // -----------------------------------------------------------------------

    #[test]
    fn scrambled_board_is_valid() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let board = Board::scrambled(Dims::new(3, 3), &mut rng);
            assert!(board.is_valid());
        }
    }

    #[test]
    fn scramble_moves_stays_in_parity_class() {
        let mut rng = rand::rng();
        let dims = Dims::new(3, 3);
        let adj = Adjacency::new(dims);
        let source = Board::solved(dims);
        for _ in 0..10 {
            let scrambled = source.scramble_moves(&adj, 30, &mut rng);
            assert!(scrambled.is_valid());
            assert!(source.solvable_from(&scrambled));
        }
    }

    // -----------------------------------------------------------------------
    // Display
    // -----------------------------------------------------------------------

    #[test]
    fn display_solved_grid() {
        assert_eq!(solved3().to_string(), "1 2 3\n4 5 6\n7 8 _");
    }

    #[test]
    fn display_pads_wide_boards() {
        let board = Board::solved(Dims::new(4, 3));
        let first_line = board.to_string().lines().next().unwrap().to_string();
        assert_eq!(first_line, " 1  2  3  4");
    }
}

//! Geometry primitives: [`Location`] and [`Dims`].

use std::fmt;

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A cell address on a board: zero-indexed (column, row).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub col: u16,
    pub row: u16,
}

impl Location {
    /// Create a new location.
    #[inline]
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Whether `other` differs from `self` by exactly one unit on exactly
    /// one axis (4-neighbor adjacency).
    #[inline]
    pub fn is_adjacent(self, other: Location) -> bool {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        dc + dr == 1
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    /// Row-major ordering: by row, then by column.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Board dimensions: columns × rows.
///
/// `Dims` doubles as the row-major coordinate system shared by every board
/// of the same shape: it converts between [`Location`]s and flat indices and
/// enumerates in-bounds neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub cols: u16,
    pub rows: u16,
}

impl Dims {
    /// Create new dimensions.
    #[inline]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Whether the board has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    /// Whether `loc` is inside the board.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        loc.col < self.cols && loc.row < self.rows
    }

    /// Row-major flat index of `loc`.
    #[inline]
    pub fn index_of(self, loc: Location) -> usize {
        debug_assert!(self.contains(loc), "location {loc} out of bounds {self}");
        loc.row as usize * self.cols as usize + loc.col as usize
    }

    /// Location of a row-major flat index.
    #[inline]
    pub fn location_of(self, idx: usize) -> Location {
        debug_assert!(idx < self.len(), "index {idx} out of bounds {self}");
        Location::new((idx % self.cols as usize) as u16, (idx / self.cols as usize) as u16)
    }

    /// In-bounds orthogonal neighbors of `loc` (up, right, down, left).
    pub fn adjacent(self, loc: Location) -> impl Iterator<Item = Location> {
        const DELTAS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        DELTAS.into_iter().filter_map(move |(dc, dr)| {
            let col = loc.col as i32 + dc;
            let row = loc.row as i32 + dr;
            if col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32 {
                Some(Location::new(col as u16, row as u16))
            } else {
                None
            }
        })
    }

    /// Row-major iterator over every location on the board.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter { dims: self, next: 0 }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

impl IntoIterator for Dims {
    type Item = Location;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// DimsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the locations of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    next: usize,
}

impl Iterator for DimsIter {
    type Item = Location;

    #[inline]
    fn next(&mut self) -> Option<Location> {
        if self.next >= self.dims.len() {
            return None;
        }
        let loc = self.dims.location_of(self.next);
        self.next += 1;
        Some(loc)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dims.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DimsIter {}

//! The [`Tile`] type — an opaque piece identity.

use std::fmt;

/// A piece occupying one board cell.
///
/// Tiles are opaque: the search layers only ever compare and hash them.
/// [`Tile::BLANK`] is the designated empty cell; a valid board over `n`
/// cells uses each of `Tile(0)..Tile(n-1)` exactly once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile(pub u16);

impl Tile {
    /// The blank cell.
    pub const BLANK: Tile = Tile(0);

    /// Whether this tile is the blank.
    #[inline]
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            f.pad("_")
        } else {
            f.pad(&self.0.to_string())
        }
    }
}

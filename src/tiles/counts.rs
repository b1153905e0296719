//! Tile-count views of a hand.
//!
//! `TileCounts` is the dense 34-slot vector the analyzers work on;
//! `tile_counts` is the id-keyed view used for display and lookups.

use std::ops::Index;

use rustc_hash::FxHashMap;

use super::tile::{Tile, TILE_KINDS};

/// Per-identity tile counts, indexed by `Tile::index()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileCounts([u8; TILE_KINDS]);

impl Default for TileCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl TileCounts {
    /// Empty count vector.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; TILE_KINDS])
    }

    /// Count the given tiles.
    pub fn from_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        let mut counts = Self::new();
        for &tile in tiles {
            counts.add(tile);
        }
        counts
    }

    /// Wrap a raw count array.
    #[must_use]
    pub const fn from_array(counts: [u8; TILE_KINDS]) -> Self {
        Self(counts)
    }

    /// Add one copy of a tile.
    pub fn add(&mut self, tile: Tile) {
        let slot = &mut self.0[tile.index()];
        *slot = slot.saturating_add(1);
    }

    /// Copies of `tile`.
    #[must_use]
    pub fn get(&self, tile: Tile) -> u8 {
        self.0[tile.index()]
    }

    /// Total number of tiles counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    #[must_use]
    pub const fn as_array(&self) -> &[u8; TILE_KINDS] {
        &self.0
    }

    /// Tiles present, with their counts, in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .filter_map(|(i, &c)| Tile::from_index(i).map(|t| (t, c)))
    }
}

impl Index<usize> for TileCounts {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl From<TileCounts> for [u8; TILE_KINDS] {
    fn from(counts: TileCounts) -> Self {
        counts.0
    }
}

/// Map from tile id to occurrence count.
pub fn tile_counts(tiles: &[Tile]) -> FxHashMap<String, u8> {
    let mut counts = FxHashMap::default();
    for tile in tiles {
        *counts.entry(tile.id()).or_insert(0) += 1;
    }
    counts
}

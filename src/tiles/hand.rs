//! Hands: ordered tile sequences analysed as multisets.
//!
//! ## Notation
//!
//! Hands parse from compact `mpsz` notation: digits followed by a suit
//! letter (`m` characters, `p` circles, `s` bamboo, `z` honors 1..=7 for
//! east, south, west, north, white, green, red). `0` is a red five.
//!
//! ```
//! use mahjong_tenpai::tiles::Hand;
//!
//! let hand: Hand = "123m456p789s1122z".parse().unwrap();
//! assert_eq!(hand.len(), 13);
//! assert_eq!(hand.to_string(), "123m456p789s1122z");
//! ```

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::counts::{tile_counts, TileCounts};
use super::tile::Tile;
use crate::core::{TenpaiError, TenpaiResult};

/// Copies of each tile identity in a full set.
pub const MAX_COPIES: u8 = 4;

/// Inline capacity: a hand after drawing.
pub const HAND_CAPACITY: usize = 14;

/// Return a sorted copy of `tiles`: by suit, then rank or honor order.
///
/// The input is left untouched. Sorting a sorted sequence returns it
/// unchanged.
pub fn sort_tiles(tiles: &[Tile]) -> Vec<Tile> {
    let mut sorted = tiles.to_vec();
    sorted.sort();
    sorted
}

/// An ordered sequence of tiles.
///
/// Order is kept for display; analysis treats the hand as a multiset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    tiles: SmallVec<[Tile; HAND_CAPACITY]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from tiles without copy-limit checks.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Append a tile without copy-limit checks.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Append a tile, refusing a fifth copy of the same identity.
    pub fn try_push(&mut self, tile: Tile) -> TenpaiResult<()> {
        if self.count_of(tile) >= MAX_COPIES {
            return Err(TenpaiError::TooManyCopies { tile: tile.id() });
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Remove the tile at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<Tile> {
        (index < self.tiles.len()).then(|| self.tiles.remove(index))
    }

    /// Remove one copy of `tile`. Returns false if the hand has none.
    pub fn remove_tile(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|&t| t == tile) {
            Some(index) => {
                self.tiles.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// A new hand with `tile` appended.
    #[must_use]
    pub fn with_tile(&self, tile: Tile) -> Self {
        let mut hand = self.clone();
        hand.push(tile);
        hand
    }

    /// A new hand in canonical sort order.
    #[must_use]
    pub fn sorted(&self) -> Self {
        Self::from_tiles(sort_tiles(&self.tiles))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Copies of `tile` held.
    #[must_use]
    pub fn count_of(&self, tile: Tile) -> u8 {
        self.tiles.iter().filter(|&&t| t == tile).count() as u8
    }

    /// Dense 34-slot count vector.
    #[must_use]
    pub fn counts(&self) -> TileCounts {
        TileCounts::from_tiles(&self.tiles)
    }

    /// Map from tile id to count.
    #[must_use]
    pub fn tile_counts(&self) -> FxHashMap<String, u8> {
        tile_counts(&self.tiles)
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self::from_tiles(iter)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl fmt::Display for Hand {
    /// Compact notation in hand order; a suit letter closes each run of
    /// same-suit tiles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.tiles.iter().peekable();
        while let Some(tile) = iter.next() {
            write!(f, "{}", tile.notation_digit())?;
            let closes_run = iter.peek().map_or(true, |next| next.suit() != tile.suit());
            if closes_run {
                write!(f, "{}", tile.suit().notation())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = TenpaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = |message: String| TenpaiError::Parse {
            input: s.to_string(),
            message,
        };

        let mut hand = Hand::new();
        let mut pending: SmallVec<[u8; HAND_CAPACITY]> = SmallVec::new();

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if let Some(digit) = c.to_digit(10) {
                pending.push(digit as u8);
                continue;
            }
            if pending.is_empty() {
                return Err(parse_error(format!("suit '{}' without digits", c)));
            }
            for digit in pending.drain(..) {
                let tile = Tile::from_notation(digit, c)
                    .ok_or_else(|| parse_error(format!("invalid tile '{}{}'", digit, c)))?;
                hand.try_push(tile)?;
            }
        }

        if !pending.is_empty() {
            return Err(parse_error("trailing digits without a suit".to_string()));
        }
        Ok(hand)
    }
}

//! Shuffled tile walls and random hands.

use super::rng::WallRng;
use crate::analysis::READY_HAND_SIZE;
use crate::tiles::{all_distinct_tiles, Hand, Tile, MAX_COPIES, TILE_KINDS};

/// Tiles in a full set: every identity, `MAX_COPIES` times.
pub const WALL_SIZE: usize = TILE_KINDS * MAX_COPIES as usize;

/// A full tile set drawn from the front.
#[derive(Clone, Debug)]
pub struct TileWall {
    tiles: Vec<Tile>,
    next: usize,
}

impl TileWall {
    /// Full set in catalogue order.
    #[must_use]
    pub fn ordered() -> Self {
        let tiles = all_distinct_tiles()
            .flat_map(|tile| std::iter::repeat(tile).take(MAX_COPIES as usize))
            .collect();
        Self { tiles, next: 0 }
    }

    /// Full set shuffled by `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut WallRng) -> Self {
        let mut wall = Self::ordered();
        rng.shuffle(&mut wall.tiles);
        wall
    }

    /// Draw the next tile.
    pub fn draw(&mut self) -> Option<Tile> {
        let tile = self.tiles.get(self.next).copied()?;
        self.next += 1;
        Some(tile)
    }

    /// Deal `size` tiles, or `None` (drawing nothing) if too few remain.
    pub fn deal_hand(&mut self, size: usize) -> Option<Hand> {
        if self.remaining() < size {
            return None;
        }
        let hand = Hand::from_tiles(self.tiles[self.next..self.next + size].iter().copied());
        self.next += size;
        Some(hand)
    }

    /// Tiles left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tiles.len() - self.next
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

/// Deal a random 13-tile hand from a freshly shuffled wall.
pub fn random_hand(rng: &mut WallRng) -> Hand {
    let wall = TileWall::shuffled(rng);
    Hand::from_tiles(wall.tiles.into_iter().take(READY_HAND_SIZE))
}

/// Deal `count` random hands, each from its own wall.
///
/// Hand `n` is shuffled by the n-th fork of `rng`, so a batch from the
/// same seed is reproducible and its prefix matches any shorter batch.
pub fn random_hands(rng: &mut WallRng, count: usize) -> Vec<Hand> {
    let hands: Vec<Hand> = (0..count).map(|_| random_hand(&mut rng.fork())).collect();
    log::debug!("dealt {} hands from seed {}", hands.len(), rng.seed());
    hands
}

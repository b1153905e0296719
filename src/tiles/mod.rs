//! Tiles, hands, and tile-count views.
//!
//! Everything the analyzers consume lives here: the 34 tile identities,
//! the hand sequence, and the dense count vector derived from it.

pub mod counts;
pub mod hand;
pub mod tile;

pub use counts::{tile_counts, TileCounts};
pub use hand::{sort_tiles, Hand, HAND_CAPACITY, MAX_COPIES};
pub use tile::{
    all_distinct_tiles, create_tile, HonorKind, Rank, Suit, Tile, HONOR_OFFSET,
    TERMINAL_HONOR_INDICES, TILE_KINDS,
};

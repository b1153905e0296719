//! # mahjong-tenpai
//!
//! Shanten and waiting-tile analysis for Japanese Riichi Mahjong hands.
//!
//! ## Design Principles
//!
//! 1. **Pure Analysis**: Every analyzer is a function of its input hand.
//!    No global state; the only mutable buffer is local to one search.
//!
//! 2. **Catalogue Order**: The 34 tile identities have one fixed order
//!    (characters, circles, bamboo, then honors). Count vectors, sorting,
//!    and wait enumeration all follow it.
//!
//! 3. **Configuration Over Convention**: Optional shapes and table rules
//!    are switched via `AnalyzerConfig` rather than separate code paths.
//!
//! ## Modules
//!
//! - `core`: Error type shared by every module
//! - `tiles`: Tile identities, hands, notation, count vectors
//! - `analysis`: Standard, seven-pairs, and thirteen-orphans shanten; waits
//! - `history`: Recorded hands, newest-first, with JSON/binary snapshots
//! - `wall`: Seeded wall shuffling and random hands
//!
//! ## Example
//!
//! ```
//! use mahjong_tenpai::{calculate_waiting_tiles, shanten, Hand};
//!
//! let hand: Hand = "1112345678999m".parse().unwrap();
//! assert_eq!(shanten(&hand), 0);
//! assert_eq!(calculate_waiting_tiles(&hand).len(), 9);
//! ```

pub mod analysis;
pub mod core;
pub mod history;
pub mod tiles;
pub mod wall;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{TenpaiError, TenpaiResult};

pub use crate::tiles::{
    all_distinct_tiles, create_tile, sort_tiles, tile_counts, Hand, HonorKind, Rank, Suit, Tile,
    TileCounts, MAX_COPIES, TILE_KINDS,
};

pub use crate::analysis::{
    calculate_waiting_tiles, is_winning_hand, shanten, AnalyzerConfig, HandAnalyzer, HandStatus,
    SevenPairsRule, ShantenBreakdown, WaitKind, WaitingResult,
};

pub use crate::history::{HandHistory, HandRecord, StoredTile};

pub use crate::wall::{random_hand, random_hands, TileWall, WallRng};

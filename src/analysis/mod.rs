//! Hand-shape analysis: shanten, winning test, waiting tiles.
//!
//! Three analyzers each score one winning shape:
//!
//! - `standard`: four sets and a pair, by recursive decomposition
//! - `seven_pairs`: closed-form pair count
//! - `thirteen_orphans`: closed-form count over terminals and honors
//!
//! The composite shanten is their minimum. Winning-hand test and wait
//! enumeration are built on top of it.
//!
//! ## Example
//!
//! ```
//! use mahjong_tenpai::analysis::calculate_waiting_tiles;
//! use mahjong_tenpai::tiles::Hand;
//!
//! let hand: Hand = "123m456p789s1122z".parse().unwrap();
//! let waits: Vec<String> = calculate_waiting_tiles(&hand)
//!     .iter()
//!     .map(|w| w.waiting_tiles[0].id())
//!     .collect();
//! assert_eq!(waits, ["honor-east", "honor-south"]);
//! ```

pub mod config;
pub mod seven_pairs;
pub mod shanten;
pub mod standard;
pub mod stats;
pub mod thirteen_orphans;
pub mod waits;

pub use config::{AnalyzerConfig, SevenPairsRule};
pub use seven_pairs::seven_pairs_shanten;
pub use shanten::{
    is_analyzable_size, is_winning_hand, shanten, HandAnalyzer, HandStatus, ShantenBreakdown,
    READY_HAND_SIZE, WINNING_HAND_SIZE,
};
pub use standard::{standard_shanten, standard_shanten_with_stats, MAX_SHANTEN};
pub use stats::SearchStats;
pub use thirteen_orphans::thirteen_orphans_shanten;
pub use waits::{calculate_waiting_tiles, WaitKind, WaitingResult};

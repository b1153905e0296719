//! Composite shanten, winning-hand test, and ready status.
//!
//! ## Usage
//!
//! ```
//! use mahjong_tenpai::analysis::{is_winning_hand, shanten, HandStatus, HandAnalyzer};
//! use mahjong_tenpai::tiles::Hand;
//!
//! let ready: Hand = "123m456p789s1122z".parse().unwrap();
//! assert_eq!(shanten(&ready), 0);
//! assert_eq!(HandAnalyzer::default().status(&ready), HandStatus::Ready);
//!
//! let complete: Hand = "123m456p789s11122z".parse().unwrap();
//! assert!(is_winning_hand(&complete));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::AnalyzerConfig;
use super::seven_pairs::seven_pairs_shanten;
use super::standard::{standard_shanten, MAX_SHANTEN};
use super::thirteen_orphans::thirteen_orphans_shanten;
use crate::tiles::Hand;

/// Size of a hand one draw away from winning.
pub const READY_HAND_SIZE: usize = 13;

/// Size of a complete hand.
pub const WINNING_HAND_SIZE: usize = 14;

/// True for hand sizes the analyzers accept: `len % 3` is 1 or 2.
#[must_use]
pub const fn is_analyzable_size(len: usize) -> bool {
    matches!(len % 3, 1 | 2)
}

/// Shanten per winning shape. Disabled shapes are `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShantenBreakdown {
    pub standard: i8,
    pub seven_pairs: Option<i8>,
    pub thirteen_orphans: Option<i8>,
}

impl ShantenBreakdown {
    /// Minimum across all shapes.
    #[must_use]
    pub fn min(&self) -> i8 {
        [self.seven_pairs, self.thirteen_orphans]
            .into_iter()
            .flatten()
            .fold(self.standard, i8::min)
    }
}

/// Ready status of a hand, as shown next to it.
///
/// `Ready` and `NotReady` describe 13-tile hands only. A hand of any other
/// size is `Complete` when it scores below zero and `NotApplicable`
/// otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandStatus {
    /// Not a 13-tile hand and not a winning shape.
    NotApplicable,
    /// Shanten −1: a winning shape.
    Complete,
    /// 13 tiles at shanten 0: one tile from winning.
    Ready,
    /// 13 tiles at shanten above zero.
    NotReady(u8),
}

impl HandStatus {
    /// Japanese label as used in mahjong clients.
    #[must_use]
    pub fn message_ja(&self) -> String {
        match self {
            HandStatus::NotApplicable => "-".to_string(),
            HandStatus::Complete => "和了".to_string(),
            HandStatus::Ready => "テンパイ".to_string(),
            HandStatus::NotReady(n) => format!("ノーテン ({}向聴)", n),
        }
    }
}

impl fmt::Display for HandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandStatus::NotApplicable => f.write_str("Not applicable"),
            HandStatus::Complete => f.write_str("Complete"),
            HandStatus::Ready => f.write_str("Ready"),
            HandStatus::NotReady(n) => write!(f, "Not ready ({}-shanten)", n),
        }
    }
}

/// Hand analyzer with a fixed configuration.
///
/// Stateless between calls; safe to share across threads.
#[derive(Clone, Debug, Default)]
pub struct HandAnalyzer {
    config: AnalyzerConfig,
}

impl HandAnalyzer {
    /// Create an analyzer with the given configuration.
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Per-shape shanten, or `None` when the hand size is not analysable.
    #[must_use]
    pub fn breakdown(&self, hand: &Hand) -> Option<ShantenBreakdown> {
        if !is_analyzable_size(hand.len()) {
            return None;
        }
        let counts = hand.counts();
        Some(ShantenBreakdown {
            standard: standard_shanten(&counts),
            seven_pairs: self
                .config
                .seven_pairs
                .then(|| seven_pairs_shanten(&counts, self.config.seven_pairs_rule)),
            thirteen_orphans: self
                .config
                .thirteen_orphans
                .then(|| thirteen_orphans_shanten(&counts)),
        })
    }

    /// Composite shanten; `8` when the hand size is not analysable.
    #[must_use]
    pub fn shanten(&self, hand: &Hand) -> i8 {
        self.breakdown(hand)
            .map_or(MAX_SHANTEN, |breakdown| breakdown.min())
    }

    /// True iff the hand has 14 tiles and shanten −1.
    #[must_use]
    pub fn is_winning_hand(&self, hand: &Hand) -> bool {
        hand.len() == WINNING_HAND_SIZE && self.shanten(hand) == -1
    }

    /// Ready status for display.
    #[must_use]
    pub fn status(&self, hand: &Hand) -> HandStatus {
        match self.breakdown(hand).map(|b| b.min()) {
            None => HandStatus::NotApplicable,
            Some(s) if s < 0 => HandStatus::Complete,
            Some(_) if hand.len() != READY_HAND_SIZE => HandStatus::NotApplicable,
            Some(0) => HandStatus::Ready,
            Some(s) => HandStatus::NotReady(s as u8),
        }
    }
}

/// Composite shanten with the default configuration.
///
/// Returns 8 for hand sizes where `len % 3` is neither 1 nor 2.
pub fn shanten(hand: &Hand) -> i8 {
    HandAnalyzer::default().shanten(hand)
}

/// Winning-hand test with the default configuration.
pub fn is_winning_hand(hand: &Hand) -> bool {
    HandAnalyzer::default().is_winning_hand(hand)
}

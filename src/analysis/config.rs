//! Analyzer configuration.

use serde::{Deserialize, Serialize};

use crate::tiles::MAX_COPIES;

/// How pairs are counted for seven-pairs shanten.
///
/// The two readings only differ when a hand holds four copies of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SevenPairsRule {
    /// Sum of `count / 2` over all identities; a quad counts as two pairs.
    #[default]
    FloorSum,
    /// Identities holding at least two copies; a quad counts as one pair.
    DistinctPairs,
}

/// Analyzer configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Include seven-pairs shanten in the composite minimum.
    pub seven_pairs: bool,

    /// Include thirteen-orphans shanten in the composite minimum.
    pub thirteen_orphans: bool,

    /// Pair counting rule for seven pairs.
    pub seven_pairs_rule: SevenPairsRule,

    /// Copies of each identity in the tile set.
    /// Waits already held this many times are skipped as exhausted.
    pub copies_per_tile: u8,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            seven_pairs: true,
            thirteen_orphans: true,
            seven_pairs_rule: SevenPairsRule::FloorSum,
            copies_per_tile: MAX_COPIES,
        }
    }
}

impl AnalyzerConfig {
    /// Standard hands only: no seven pairs, no thirteen orphans.
    #[must_use]
    pub fn standard_only() -> Self {
        Self {
            seven_pairs: false,
            thirteen_orphans: false,
            ..Self::default()
        }
    }

    /// Enable or disable seven pairs.
    #[must_use]
    pub fn with_seven_pairs(mut self, enabled: bool) -> Self {
        self.seven_pairs = enabled;
        self
    }

    /// Enable or disable thirteen orphans.
    #[must_use]
    pub fn with_thirteen_orphans(mut self, enabled: bool) -> Self {
        self.thirteen_orphans = enabled;
        self
    }

    /// Set the seven-pairs counting rule.
    #[must_use]
    pub fn with_seven_pairs_rule(mut self, rule: SevenPairsRule) -> Self {
        self.seven_pairs_rule = rule;
        self
    }

    /// Set copies per tile identity.
    #[must_use]
    pub fn with_copies_per_tile(mut self, copies: u8) -> Self {
        self.copies_per_tile = copies;
        self
    }
}

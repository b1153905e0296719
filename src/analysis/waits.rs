//! Waiting-tile enumeration for ready hands.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::shanten::{HandAnalyzer, READY_HAND_SIZE};
use crate::tiles::{all_distinct_tiles, Hand, Tile, TILE_KINDS};

/// Winning shape completed by a waiting tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaitKind {
    /// Four sets and a pair.
    Normal,
    SevenPairs,
    ThirteenOrphans,
}

impl WaitKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            WaitKind::Normal => "Normal Wait",
            WaitKind::SevenPairs => "Seven Pairs Wait",
            WaitKind::ThirteenOrphans => "Thirteen Orphans Wait",
        }
    }

    #[must_use]
    pub const fn label_ja(self) -> &'static str {
        match self {
            WaitKind::Normal => "通常待ち",
            WaitKind::SevenPairs => "七対子待ち",
            WaitKind::ThirteenOrphans => "国士無双待ち",
        }
    }
}

/// A tile that completes a ready hand, with display metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaitingResult {
    /// Completing tiles. Always a single tile today.
    pub waiting_tiles: SmallVec<[Tile; 1]>,

    /// Shape the tile completes.
    pub kind: WaitKind,

    /// Human-readable description.
    pub description: String,

    /// Copies not in the hand.
    pub remaining_tiles: Option<u8>,

    /// Chance the next draw is one of the remaining copies, counting only
    /// the player's own hand as seen.
    pub probability: Option<f64>,
}

impl WaitingResult {
    /// Create a result for a single completing tile.
    pub fn new(tile: Tile, kind: WaitKind) -> Self {
        Self {
            waiting_tiles: SmallVec::from_buf([tile]),
            kind,
            description: format!("Wins on {}", tile.name()),
            remaining_tiles: None,
            probability: None,
        }
    }

    /// Attach remaining copies and draw probability out of `unseen` tiles.
    #[must_use]
    pub fn with_remaining(mut self, remaining: u8, unseen: usize) -> Self {
        self.remaining_tiles = Some(remaining);
        self.probability = (unseen > 0).then(|| remaining as f64 / unseen as f64);
        self
    }

    /// English wait-type label.
    #[must_use]
    pub fn waiting_type(&self) -> &'static str {
        self.kind.label()
    }

    /// Japanese wait-type label.
    #[must_use]
    pub fn waiting_type_japanese(&self) -> &'static str {
        self.kind.label_ja()
    }

    /// True if `tile` is one of the completing tiles.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.waiting_tiles.contains(&tile)
    }
}

impl HandAnalyzer {
    /// Every tile that turns this 13-tile ready hand into a winning hand.
    ///
    /// Returns an empty list for hands that are not 13 tiles or not ready.
    /// Tiles the hand already holds `copies_per_tile` of are skipped.
    /// Results follow catalogue order.
    pub fn waiting_tiles(&self, hand: &Hand) -> Vec<WaitingResult> {
        if hand.len() != READY_HAND_SIZE {
            log::debug!("skipping waits: hand has {} tiles", hand.len());
            return Vec::new();
        }
        let shanten = self.shanten(hand);
        if shanten != 0 {
            log::debug!("skipping waits: hand is {}-shanten", shanten);
            return Vec::new();
        }

        let copies = self.config().copies_per_tile;
        let counts = hand.counts();
        let unseen = (TILE_KINDS * copies as usize).saturating_sub(hand.len());

        let mut seen = FxHashSet::default();
        let mut results = Vec::new();

        for tile in all_distinct_tiles() {
            let held = counts.get(tile);
            if held >= copies {
                continue;
            }
            let candidate = hand.with_tile(tile);
            if !self.is_winning_hand(&candidate) || !seen.insert(tile.id()) {
                continue;
            }
            let kind = self.completed_shape(&candidate);
            results.push(WaitingResult::new(tile, kind).with_remaining(copies - held, unseen));
        }

        log::debug!("{} waits for {}", results.len(), hand);
        results
    }

    /// Shape a winning hand completes, preferring the standard shape.
    fn completed_shape(&self, hand: &Hand) -> WaitKind {
        match self.breakdown(hand) {
            Some(b) if b.standard == -1 => WaitKind::Normal,
            Some(b) if b.seven_pairs == Some(-1) => WaitKind::SevenPairs,
            _ => WaitKind::ThirteenOrphans,
        }
    }
}

/// Waiting tiles with the default configuration.
pub fn calculate_waiting_tiles(hand: &Hand) -> Vec<WaitingResult> {
    HandAnalyzer::default().waiting_tiles(hand)
}

//! Standard-hand shanten: distance to four sets and a pair.
//!
//! ## Search
//!
//! Recursive backtracking over the 34-slot count vector. Each call takes
//! the lowest identity still present and tries, in order: triplet, run,
//! pair as a partial set, adjacent partial run, one-gap partial run, and
//! finally dropping it as an isolated tile. A leaf scores
//! `8 - 2 * sets - partials`; the search stops counting once sets plus
//! partials reach four.
//!
//! The search runs once with no pair-head reserved and once per identity
//! holding two or more copies, with that pair removed up front and one
//! subtracted from the result. The answer is the minimum over all runs.
//!
//! Counts are mutated in place and restored after every branch.

use super::stats::SearchStats;
use crate::tiles::{TileCounts, HONOR_OFFSET, TILE_KINDS};

/// Ceiling value: no sets or partial sets at all.
pub const MAX_SHANTEN: i8 = 8;

/// Sets plus partial sets that count toward the score.
const MAX_BLOCKS: u8 = 4;

/// Standard-hand shanten for the given counts.
///
/// `-1` is a complete hand, `0` is ready, `8` the worst case.
pub fn standard_shanten(counts: &TileCounts) -> i8 {
    standard_shanten_with_stats(counts).0
}

/// Standard-hand shanten plus search statistics.
pub fn standard_shanten_with_stats(counts: &TileCounts) -> (i8, SearchStats) {
    let mut search = Search {
        counts: *counts.as_array(),
        nodes: 0,
    };
    let mut stats = SearchStats::new();

    let mut best = search.run(0, 0);

    for head in 0..TILE_KINDS {
        if search.counts[head] < 2 {
            continue;
        }
        stats.head_candidates += 1;
        search.counts[head] -= 2;
        best = best.min(search.run(0, 0) - 1);
        search.counts[head] += 2;
    }

    stats.nodes = search.nodes;
    log::trace!(
        "standard search: shanten {} after {} nodes over {} runs",
        best,
        stats.nodes,
        stats.runs()
    );
    (best, stats)
}

/// Working buffer for one search.
struct Search {
    counts: [u8; TILE_KINDS],
    nodes: u64,
}

impl Search {
    fn run(&mut self, sets: u8, partials: u8) -> i8 {
        self.nodes += 1;
        let mut best = MAX_SHANTEN - 2 * sets as i8 - partials as i8;

        let Some(i) = self.counts.iter().position(|&c| c > 0) else {
            return best;
        };
        if sets + partials >= MAX_BLOCKS {
            return best;
        }

        // Triplet
        if self.counts[i] >= 3 {
            best = best.min(self.branch(&[i, i, i], sets + 1, partials));
        }

        // Run
        if spans_within_suit(i, 2) && self.counts[i + 1] > 0 && self.counts[i + 2] > 0 {
            best = best.min(self.branch(&[i, i + 1, i + 2], sets + 1, partials));
        }

        // Pair as a partial set
        if self.counts[i] >= 2 {
            best = best.min(self.branch(&[i, i], sets, partials + 1));
        }

        // Adjacent partial run
        if spans_within_suit(i, 1) && self.counts[i + 1] > 0 {
            best = best.min(self.branch(&[i, i + 1], sets, partials + 1));
        }

        // One-gap partial run
        if spans_within_suit(i, 2) && self.counts[i + 2] > 0 {
            best = best.min(self.branch(&[i, i + 2], sets, partials + 1));
        }

        // Isolated
        best.min(self.branch(&[i], sets, partials))
    }

    /// Remove `tiles`, recurse, and put them back.
    fn branch(&mut self, tiles: &[usize], sets: u8, partials: u8) -> i8 {
        for &t in tiles {
            self.counts[t] -= 1;
        }
        let result = self.run(sets, partials);
        for &t in tiles {
            self.counts[t] += 1;
        }
        result
    }
}

/// True when `index` and `index + span` are in the same numbered suit.
const fn spans_within_suit(index: usize, span: usize) -> bool {
    index < HONOR_OFFSET && index % 9 + span <= 8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Hand;

    fn shanten_of(notation: &str) -> i8 {
        let hand: Hand = notation.parse().unwrap();
        standard_shanten(&hand.counts())
    }

    #[test]
    fn test_empty_is_ceiling() {
        assert_eq!(standard_shanten(&TileCounts::new()), MAX_SHANTEN);
    }

    #[test]
    fn test_complete_hands() {
        assert_eq!(shanten_of("123m456p789s11122z"), -1);
        assert_eq!(shanten_of("111222333m44455p"), -1);
        assert_eq!(shanten_of("11123455678999m"), -1);
    }

    #[test]
    fn test_ready_hands() {
        // two pairs: shanpon
        assert_eq!(shanten_of("123m456p789s1122z"), 0);
        // single wait
        assert_eq!(shanten_of("123m456p789s111z5z"), 0);
        // nine gates
        assert_eq!(shanten_of("1112345678999m"), 0);
    }

    #[test]
    fn test_one_away() {
        assert_eq!(shanten_of("1234567m111z55z9s"), 1);
    }

    #[test]
    fn test_no_blocks() {
        assert_eq!(shanten_of("147m258p369s1234z"), 8);
    }

    #[test]
    fn test_runs_do_not_wrap_suits() {
        // 8m 9m 1p is not a run
        assert_eq!(shanten_of("89m1p"), 7);
        // honors never form runs
        assert_eq!(shanten_of("123z"), 8);
        assert_eq!(shanten_of("13z"), 8);
    }

    #[test]
    fn test_counts_restored() {
        let hand: Hand = "123m456p789s1122z".parse().unwrap();
        let counts = hand.counts();
        let first = standard_shanten(&counts);
        assert_eq!(standard_shanten(&counts), first);
        assert_eq!(counts, hand.counts());
    }

    #[test]
    fn test_stats() {
        let hand: Hand = "123m456p789s1122z".parse().unwrap();
        let (shanten, stats) = standard_shanten_with_stats(&hand.counts());
        assert_eq!(shanten, 0);
        assert_eq!(stats.head_candidates, 2);
        assert!(stats.nodes > 0);
    }

    #[test]
    fn test_spans_within_suit() {
        assert!(spans_within_suit(0, 2));
        assert!(spans_within_suit(6, 2));
        assert!(!spans_within_suit(7, 2));
        assert!(spans_within_suit(7, 1));
        assert!(!spans_within_suit(8, 1));
        assert!(!spans_within_suit(27, 1));
    }
}

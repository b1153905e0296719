//! Seven-pairs shanten.

use super::config::SevenPairsRule;
use crate::tiles::TileCounts;

/// Seven-pairs shanten: `6 - pairs`, with pairs counted per `rule`.
///
/// Seven distinct pairs give `-1`.
pub fn seven_pairs_shanten(counts: &TileCounts, rule: SevenPairsRule) -> i8 {
    let pairs: usize = match rule {
        SevenPairsRule::FloorSum => counts.as_array().iter().map(|&c| (c / 2) as usize).sum(),
        SevenPairsRule::DistinctPairs => counts.as_array().iter().filter(|&&c| c >= 2).count(),
    };
    6 - pairs.min(i8::MAX as usize) as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Hand;

    fn shanten_of(notation: &str, rule: SevenPairsRule) -> i8 {
        let hand: Hand = notation.parse().unwrap();
        seven_pairs_shanten(&hand.counts(), rule)
    }

    #[test]
    fn test_complete() {
        assert_eq!(shanten_of("1133m55p77s112233z", SevenPairsRule::FloorSum), -1);
        assert_eq!(shanten_of("1133m55p77s112233z", SevenPairsRule::DistinctPairs), -1);
    }

    #[test]
    fn test_ready() {
        assert_eq!(shanten_of("1133m55p77s11223z", SevenPairsRule::FloorSum), 0);
    }

    #[test]
    fn test_no_pairs() {
        assert_eq!(shanten_of("147m258p369s1234z", SevenPairsRule::FloorSum), 6);
        assert_eq!(shanten_of("", SevenPairsRule::FloorSum), 6);
    }

    #[test]
    fn test_rules_diverge_on_quads() {
        // 1111m counts as two pairs under the floor-sum rule, one otherwise
        assert_eq!(shanten_of("1111m55p77s11223z", SevenPairsRule::FloorSum), 0);
        assert_eq!(shanten_of("1111m55p77s11223z", SevenPairsRule::DistinctPairs), 1);
    }

    #[test]
    fn test_triplet_is_one_pair() {
        assert_eq!(shanten_of("111m", SevenPairsRule::FloorSum), 5);
        assert_eq!(shanten_of("111m", SevenPairsRule::DistinctPairs), 5);
    }
}

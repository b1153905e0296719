//! Thirteen-orphans shanten.

use crate::tiles::{TileCounts, TERMINAL_HONOR_INDICES};

/// Thirteen-orphans shanten over the 13 terminal and honor identities.
///
/// `u` is how many of them are present; a pair among them saves one more
/// tile: `(12 if pair else 13) - u`.
pub fn thirteen_orphans_shanten(counts: &TileCounts) -> i8 {
    let mut unique = 0i8;
    let mut has_pair = false;
    for &index in &TERMINAL_HONOR_INDICES {
        if counts[index] > 0 {
            unique += 1;
            has_pair |= counts[index] >= 2;
        }
    }
    if has_pair {
        12 - unique
    } else {
        13 - unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Hand;

    fn shanten_of(notation: &str) -> i8 {
        let hand: Hand = notation.parse().unwrap();
        thirteen_orphans_shanten(&hand.counts())
    }

    #[test]
    fn test_complete() {
        assert_eq!(shanten_of("19m19p19s12345677z"), -1);
    }

    #[test]
    fn test_thirteen_sided_wait() {
        assert_eq!(shanten_of("19m19p19s1234567z"), 0);
    }

    #[test]
    fn test_pair_without_all_kinds() {
        // 12 kinds plus a pair: waiting on the missing kind
        assert_eq!(shanten_of("19m19p19s1234566z"), 0);
    }

    #[test]
    fn test_simples_do_not_count() {
        assert_eq!(shanten_of("2345678m2345p"), 13);
        assert_eq!(shanten_of(""), 13);
    }
}

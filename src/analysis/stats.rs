//! Standard-search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one standard-hand shanten search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Recursive calls made across all runs.
    pub nodes: u64,

    /// Pair-head candidates tried (identities with two or more copies).
    pub head_candidates: u32,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Searches performed: the headless run plus one per head candidate.
    #[must_use]
    pub fn runs(&self) -> u32 {
        self.head_candidates + 1
    }

    /// Average nodes visited per run.
    #[must_use]
    pub fn avg_nodes_per_run(&self) -> f64 {
        self.nodes as f64 / self.runs() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.head_candidates, 0);
        assert_eq!(stats.runs(), 1);
    }

    #[test]
    fn test_avg_nodes_per_run() {
        let stats = SearchStats {
            nodes: 300,
            head_candidates: 2,
        };
        assert_eq!(stats.runs(), 3);
        assert_eq!(stats.avg_nodes_per_run(), 100.0);
    }
}

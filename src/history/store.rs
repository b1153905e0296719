//! In-memory hand history.
//!
//! ## Example
//!
//! ```
//! use mahjong_tenpai::history::HandHistory;
//! use mahjong_tenpai::tiles::Hand;
//!
//! let mut history = HandHistory::new();
//! let first: Hand = "123m456p789s1122z".parse().unwrap();
//! let second: Hand = "19m19p19s1234567z".parse().unwrap();
//!
//! history.record(&first, 1_000).unwrap();
//! history.record(&second, 2_000).unwrap();
//!
//! let newest = history.entries()[0].to_hand().unwrap();
//! assert_eq!(newest, second);
//! ```

use std::collections::hash_map::Entry;
use std::time::{SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashMap;

use super::record::{HandRecord, StoredTile};
use crate::analysis::READY_HAND_SIZE;
use crate::core::{TenpaiError, TenpaiResult};
use crate::tiles::Hand;

/// Recorded 13-tile hands, retrievable newest-first.
#[derive(Clone, Debug)]
pub struct HandHistory {
    records: FxHashMap<u64, HandRecord>,
    next_id: u64,
}

impl Default for HandHistory {
    fn default() -> Self {
        Self {
            records: FxHashMap::default(),
            next_id: 1,
        }
    }
}

impl HandHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a 13-tile hand stamped with `created_at` (Unix ms).
    pub fn record(&mut self, hand: &Hand, created_at: u64) -> TenpaiResult<&HandRecord> {
        if hand.len() != READY_HAND_SIZE {
            return Err(TenpaiError::InvalidHandSize {
                expected: READY_HAND_SIZE,
                actual: hand.len(),
            });
        }

        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| TenpaiError::InvalidRecord {
            id,
            message: "id space exhausted".to_string(),
        })?;

        let record = HandRecord {
            id,
            created_at,
            tiles: hand.iter().copied().map(StoredTile::from).collect(),
        };
        log::debug!("recorded hand {} ({})", id, hand);
        Ok(self.records.entry(id).or_insert(record))
    }

    /// Record a 13-tile hand stamped with the current time.
    pub fn record_now(&mut self, hand: &Hand) -> TenpaiResult<&HandRecord> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.record(hand, now)
    }

    /// Get a record by ID.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&HandRecord> {
        self.records.get(&id)
    }

    /// All records, newest first. Equal timestamps order by ID, highest first.
    #[must_use]
    pub fn entries(&self) -> Vec<&HandRecord> {
        let mut entries: Vec<_> = self.records.values().collect();
        entries.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export as a JSON array, newest first.
    pub fn to_json(&self) -> TenpaiResult<String> {
        Ok(serde_json::to_string(&self.entries())?)
    }

    /// Import from a JSON array of records.
    pub fn from_json(json: &str) -> TenpaiResult<Self> {
        let records: Vec<HandRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Compact binary snapshot.
    pub fn to_bytes(&self) -> TenpaiResult<Vec<u8>> {
        Ok(bincode::serialize(&self.entries())?)
    }

    /// Restore from a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> TenpaiResult<Self> {
        let records: Vec<HandRecord> = bincode::deserialize(bytes)?;
        Self::from_records(records)
    }

    /// Build a history from records, checking every tile and hand size.
    fn from_records(records: Vec<HandRecord>) -> TenpaiResult<Self> {
        let mut history = Self::new();
        for record in records {
            let hand = record.to_hand()?;
            if hand.len() != READY_HAND_SIZE {
                return Err(TenpaiError::InvalidHandSize {
                    expected: READY_HAND_SIZE,
                    actual: hand.len(),
                });
            }
            let id = record.id;
            let after = id.checked_add(1).ok_or_else(|| TenpaiError::InvalidRecord {
                id,
                message: "id leaves no room for new records".to_string(),
            })?;
            match history.records.entry(id) {
                Entry::Occupied(_) => {
                    return Err(TenpaiError::InvalidRecord {
                        id,
                        message: "duplicate id".to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
            history.next_id = history.next_id.max(after);
        }
        log::debug!("imported {} hand records", history.len());
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(notation: &str) -> Hand {
        notation.parse().unwrap()
    }

    #[test]
    fn test_record_assigns_ids() {
        let mut history = HandHistory::new();
        let first = history.record(&hand("123m456p789s1122z"), 10).unwrap().id;
        let second = history.record(&hand("1112345678999m"), 20).unwrap().id;
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(history.len(), 2);
        assert!(history.get(1).is_some());
        assert!(history.get(3).is_none());
    }

    #[test]
    fn test_rejects_wrong_size() {
        let mut history = HandHistory::new();
        let err = history.record(&hand("123m"), 0).unwrap_err();
        assert_eq!(
            err,
            TenpaiError::InvalidHandSize {
                expected: 13,
                actual: 3
            }
        );
        assert!(history.is_empty());
    }

    #[test]
    fn test_entries_newest_first() {
        let mut history = HandHistory::new();
        history.record(&hand("123m456p789s1122z"), 200).unwrap();
        history.record(&hand("1112345678999m"), 100).unwrap();
        history.record(&hand("19m19p19s1234567z"), 200).unwrap();

        let ids: Vec<_> = history.entries().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_record_now_is_stamped() {
        let mut history = HandHistory::new();
        let record = history.record_now(&hand("123m456p789s1122z")).unwrap();
        assert!(record.created_at > 0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut history = HandHistory::new();
        history.record(&hand("123m456p789s1122z"), 1).unwrap();
        history.record(&hand("1112345678999m"), 2).unwrap();

        let json = history.to_json().unwrap();
        let restored = HandHistory::from_json(&json).unwrap();
        assert_eq!(restored.entries(), history.entries());

        // ids continue after the highest imported one
        let mut restored = restored;
        let next = restored.record(&hand("19m19p19s1234567z"), 3).unwrap().id;
        assert_eq!(next, 3);
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut history = HandHistory::new();
        history.record(&hand("123m456p789s1122z"), 1).unwrap();

        let bytes = history.to_bytes().unwrap();
        let restored = HandHistory::from_bytes(&bytes).unwrap();
        assert_eq!(restored.entries(), history.entries());
    }

    fn stored(id: u64, notation: &str) -> HandRecord {
        HandRecord {
            id,
            created_at: id,
            tiles: hand(notation).iter().copied().map(StoredTile::from).collect(),
        }
    }

    #[test]
    fn test_import_rejects_last_possible_id() {
        let json = serde_json::to_string(&vec![stored(u64::MAX, "123m456p789s1122z")]).unwrap();
        assert!(matches!(
            HandHistory::from_json(&json),
            Err(TenpaiError::InvalidRecord { id: u64::MAX, .. })
        ));

        // one below the limit imports, but no further id can be handed out
        let json =
            serde_json::to_string(&vec![stored(u64::MAX - 1, "123m456p789s1122z")]).unwrap();
        let mut history = HandHistory::from_json(&json).unwrap();
        assert_eq!(history.len(), 1);
        assert!(matches!(
            history.record(&hand("1112345678999m"), 0),
            Err(TenpaiError::InvalidRecord { id: u64::MAX, .. })
        ));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_import_rejects_duplicate_ids() {
        let records = vec![
            stored(1, "123m456p789s1122z"),
            stored(1, "1112345678999m"),
        ];
        let json = serde_json::to_string(&records).unwrap();
        assert!(matches!(
            HandHistory::from_json(&json),
            Err(TenpaiError::InvalidRecord { id: 1, .. })
        ));

        let bytes = bincode::serialize(&records).unwrap();
        assert!(matches!(
            HandHistory::from_bytes(&bytes),
            Err(TenpaiError::InvalidRecord { id: 1, .. })
        ));
    }

    #[test]
    fn test_import_rejects_bad_tiles() {
        let json = r#"[{"id":1,"createdAt":5,"tiles":[{"type":"man","value":"0"}]}]"#;
        assert!(matches!(
            HandHistory::from_json(json),
            Err(TenpaiError::InvalidTile { .. })
        ));
        assert!(matches!(
            HandHistory::from_json("{"),
            Err(TenpaiError::Serialization { .. })
        ));
    }
}

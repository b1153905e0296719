//! Stored hand records.
//!
//! The record shape matches what the record-keeping service persists:
//! each tile as a `(type, value)` pair of strings, with numeric ranks
//! stored as digits and honor ranks by name.

use serde::{Deserialize, Serialize};

use crate::core::TenpaiResult;
use crate::tiles::{Hand, Tile};

/// A tile as persisted: `{"type": "man", "value": "1"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoredTile {
    #[serde(rename = "type")]
    pub suit: String,
    pub value: String,
}

impl StoredTile {
    #[must_use]
    pub fn from_tile(tile: Tile) -> Self {
        Self {
            suit: tile.suit().as_str().to_string(),
            value: tile.rank().to_string(),
        }
    }

    /// Rebuild the tile, failing on out-of-domain strings.
    pub fn to_tile(&self) -> TenpaiResult<Tile> {
        Tile::from_record(&self.suit, &self.value)
    }
}

impl From<Tile> for StoredTile {
    fn from(tile: Tile) -> Self {
        Self::from_tile(tile)
    }
}

/// One recorded hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandRecord {
    pub id: u64,

    /// Unix time in milliseconds.
    pub created_at: u64,

    pub tiles: Vec<StoredTile>,
}

impl HandRecord {
    /// Rebuild the recorded hand.
    pub fn to_hand(&self) -> TenpaiResult<Hand> {
        self.tiles.iter().map(StoredTile::to_tile).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::HonorKind;

    #[test]
    fn test_stored_tile_shape() {
        let stored = StoredTile::from_tile(Tile::honor(HonorKind::North));
        assert_eq!(stored.suit, "honor");
        assert_eq!(stored.value, "north");

        let json = serde_json::to_string(&stored).unwrap();
        assert_eq!(json, r#"{"type":"honor","value":"north"}"#);
    }

    #[test]
    fn test_stored_tile_round_trip() {
        for tile in crate::tiles::all_distinct_tiles() {
            assert_eq!(StoredTile::from(tile).to_tile().unwrap(), tile);
        }
    }

    #[test]
    fn test_bad_stored_tile() {
        let stored = StoredTile {
            suit: "man".into(),
            value: "ten".into(),
        };
        assert!(stored.to_tile().is_err());
    }

    #[test]
    fn test_record_to_hand() {
        let hand: Hand = "19m5z".parse().unwrap();
        let record = HandRecord {
            id: 1,
            created_at: 0,
            tiles: hand.iter().copied().map(StoredTile::from).collect(),
        };
        assert_eq!(record.to_hand().unwrap(), hand);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""createdAt":0"#));
    }
}

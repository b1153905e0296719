//! Hand history: the record-keeping boundary.
//!
//! Ready-hand checks record each 13-tile hand with a timestamp; the
//! history returns them newest-first and rebuilds `Hand` values from the
//! stored `(suit, rank-string)` shape.

pub mod record;
pub mod store;

pub use record::{HandRecord, StoredTile};
pub use store::HandHistory;

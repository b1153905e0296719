//! Crate error type.
//!
//! Analyzer functions are total and never fail; errors only arise at the
//! edges where tiles and hands are built from outside data (record strings,
//! notation, user edits) or where history snapshots are encoded.

use std::fmt;

/// Errors raised while constructing tiles and hands or encoding history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenpaiError {
    /// Suit/rank pair outside the tile domain.
    InvalidTile { suit: String, rank: String },
    /// Malformed tile id or hand notation.
    Parse { input: String, message: String },
    /// Adding this tile would exceed the copies available in a set.
    TooManyCopies { tile: String },
    /// Hand has the wrong number of tiles for the operation.
    InvalidHandSize { expected: usize, actual: usize },
    /// Imported history record that cannot be stored.
    InvalidRecord { id: u64, message: String },
    /// JSON or binary snapshot encoding failed.
    Serialization { message: String },
}

impl fmt::Display for TenpaiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenpaiError::InvalidTile { suit, rank } => {
                write!(f, "Invalid tile: suit '{}' rank '{}'", suit, rank)
            }
            TenpaiError::Parse { input, message } => {
                write!(f, "Parse error on '{}': {}", input, message)
            }
            TenpaiError::TooManyCopies { tile } => {
                write!(f, "Too many copies of {}", tile)
            }
            TenpaiError::InvalidHandSize { expected, actual } => {
                write!(f, "Expected {} tiles, got {}", expected, actual)
            }
            TenpaiError::InvalidRecord { id, message } => {
                write!(f, "Invalid record {}: {}", id, message)
            }
            TenpaiError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for TenpaiError {}

impl From<serde_json::Error> for TenpaiError {
    fn from(err: serde_json::Error) -> Self {
        TenpaiError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<bincode::Error> for TenpaiError {
    fn from(err: bincode::Error) -> Self {
        TenpaiError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "python")]
impl From<TenpaiError> for pyo3::PyErr {
    fn from(err: TenpaiError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// Result alias used across the crate.
pub type TenpaiResult<T> = Result<T, TenpaiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TenpaiError::InvalidTile {
            suit: "man".into(),
            rank: "10".into(),
        };
        assert_eq!(err.to_string(), "Invalid tile: suit 'man' rank '10'");

        let err = TenpaiError::InvalidHandSize {
            expected: 13,
            actual: 12,
        };
        assert_eq!(err.to_string(), "Expected 13 tiles, got 12");

        let err = TenpaiError::InvalidRecord {
            id: 4,
            message: "duplicate id".into(),
        };
        assert_eq!(err.to_string(), "Invalid record 4: duplicate id");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: TenpaiError = json_err.into();
        assert!(matches!(err, TenpaiError::Serialization { .. }));
    }
}

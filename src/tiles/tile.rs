//! Tile identities.
//!
//! A tile is a `(Suit, Rank)` pair. Numbered suits carry `Rank::Number(1..=9)`
//! and the honor suit carries `Rank::Honor(kind)`; the constructor rejects
//! any other combination, so every `Tile` value is one of the 34 identities.
//!
//! ## Usage
//!
//! ```
//! use mahjong_tenpai::tiles::{create_tile, HonorKind, Rank, Suit, Tile};
//!
//! let one_man = create_tile(Suit::Characters, Rank::Number(1)).unwrap();
//! assert_eq!(one_man.id(), "man-1");
//!
//! let east = Tile::honor(HonorKind::East);
//! assert_eq!(east.id(), "honor-east");
//! assert!(one_man < east);
//!
//! // Record-keeping shape: (suit, rank-as-string)
//! assert_eq!(Tile::from_record("honor", "east").unwrap(), east);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{TenpaiError, TenpaiResult};

/// Number of distinct tile identities.
pub const TILE_KINDS: usize = 34;

/// Index of the first honor tile in the dense 0..34 layout.
pub const HONOR_OFFSET: usize = 27;

/// Dense indices of the 13 terminal and honor identities.
pub const TERMINAL_HONOR_INDICES: [usize; 13] = [0, 8, 9, 17, 18, 26, 27, 28, 29, 30, 31, 32, 33];

/// Tile suit. Declaration order is the canonical sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "man")]
    Characters,
    #[serde(rename = "pin")]
    Circles,
    #[serde(rename = "sou")]
    Bamboo,
    #[serde(rename = "honor")]
    Honor,
}

impl Suit {
    /// All suits in sort order.
    pub const ALL: [Suit; 4] = [Suit::Characters, Suit::Circles, Suit::Bamboo, Suit::Honor];

    /// Suits that carry numeric ranks.
    pub const NUMBERED: [Suit; 3] = [Suit::Characters, Suit::Circles, Suit::Bamboo];

    /// Identifier used in tile ids and stored records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Suit::Characters => "man",
            Suit::Circles => "pin",
            Suit::Bamboo => "sou",
            Suit::Honor => "honor",
        }
    }

    /// Suit letter in compact hand notation.
    #[must_use]
    pub const fn notation(self) -> char {
        match self {
            Suit::Characters => 'm',
            Suit::Circles => 'p',
            Suit::Bamboo => 's',
            Suit::Honor => 'z',
        }
    }

    #[must_use]
    pub const fn is_numbered(self) -> bool {
        !matches!(self, Suit::Honor)
    }

    /// First dense index belonging to this suit.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Suit::Characters => 0,
            Suit::Circles => 9,
            Suit::Bamboo => 18,
            Suit::Honor => HONOR_OFFSET,
        }
    }

    /// English display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Characters => "Characters",
            Suit::Circles => "Circles",
            Suit::Bamboo => "Bamboo",
            Suit::Honor => "Honor",
        }
    }

    /// Japanese display name.
    #[must_use]
    pub const fn name_ja(self) -> &'static str {
        match self {
            Suit::Characters => "萬子",
            Suit::Circles => "筒子",
            Suit::Bamboo => "索子",
            Suit::Honor => "字牌",
        }
    }

    fn from_notation(c: char) -> Option<Self> {
        match c {
            'm' => Some(Suit::Characters),
            'p' => Some(Suit::Circles),
            's' => Some(Suit::Bamboo),
            'z' => Some(Suit::Honor),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = TenpaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.as_str() == s)
            .ok_or_else(|| TenpaiError::Parse {
                input: s.to_string(),
                message: "unknown suit".to_string(),
            })
    }
}

/// Honor tile kind. Declaration order is the canonical sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HonorKind {
    East,
    South,
    West,
    North,
    White,
    Green,
    Red,
}

impl HonorKind {
    pub const ALL: [HonorKind; 7] = [
        HonorKind::East,
        HonorKind::South,
        HonorKind::West,
        HonorKind::North,
        HonorKind::White,
        HonorKind::Green,
        HonorKind::Red,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HonorKind::East => "east",
            HonorKind::South => "south",
            HonorKind::West => "west",
            HonorKind::North => "north",
            HonorKind::White => "white",
            HonorKind::Green => "green",
            HonorKind::Red => "red",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HonorKind::East => "East",
            HonorKind::South => "South",
            HonorKind::West => "West",
            HonorKind::North => "North",
            HonorKind::White => "White",
            HonorKind::Green => "Green",
            HonorKind::Red => "Red",
        }
    }

    #[must_use]
    pub const fn name_ja(self) -> &'static str {
        match self {
            HonorKind::East => "東",
            HonorKind::South => "南",
            HonorKind::West => "西",
            HonorKind::North => "北",
            HonorKind::White => "白",
            HonorKind::Green => "發",
            HonorKind::Red => "中",
        }
    }
}

impl FromStr for HonorKind {
    type Err = TenpaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HonorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TenpaiError::Parse {
                input: s.to_string(),
                message: "unknown honor kind".to_string(),
            })
    }
}

/// Tile rank: a number for the three numbered suits, a kind for honors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rank {
    Number(u8),
    Honor(HonorKind),
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{}", n),
            Rank::Honor(kind) => f.write_str(kind.as_str()),
        }
    }
}

/// One of the 34 tile identities.
///
/// Ordering is the canonical display order: suit first, then rank
/// (numeric ascending, honors east..red).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTile", into = "RawTile")]
pub struct Tile {
    suit: Suit,
    rank: Rank,
}

impl Tile {
    /// Create a tile, rejecting suit/rank combinations outside the domain.
    pub fn new(suit: Suit, rank: Rank) -> TenpaiResult<Self> {
        match (suit, rank) {
            (s, Rank::Number(n)) if s.is_numbered() && (1..=9).contains(&n) => {
                Ok(Self { suit, rank })
            }
            (Suit::Honor, Rank::Honor(_)) => Ok(Self { suit, rank }),
            _ => Err(TenpaiError::InvalidTile {
                suit: suit.as_str().to_string(),
                rank: rank.to_string(),
            }),
        }
    }

    /// Create a numbered tile.
    pub fn numbered(suit: Suit, number: u8) -> TenpaiResult<Self> {
        Self::new(suit, Rank::Number(number))
    }

    /// Create an honor tile.
    #[must_use]
    pub const fn honor(kind: HonorKind) -> Self {
        Self {
            suit: Suit::Honor,
            rank: Rank::Honor(kind),
        }
    }

    /// Tile at a dense index (0..34), or `None` past the end.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < HONOR_OFFSET {
            Some(Self {
                suit: Suit::NUMBERED[index / 9],
                rank: Rank::Number((index % 9) as u8 + 1),
            })
        } else if index < TILE_KINDS {
            Some(Self::honor(HonorKind::ALL[index - HONOR_OFFSET]))
        } else {
            None
        }
    }

    /// Rebuild a tile from the stored `(suit, rank-string)` shape.
    ///
    /// Numeric ranks are stored as a single digit, honor ranks by name.
    /// Anything else (`"+3"`, `"03"`) is rejected so a stored tile always
    /// saves back to the same strings.
    pub fn from_record(suit: &str, rank: &str) -> TenpaiResult<Self> {
        let invalid = || TenpaiError::InvalidTile {
            suit: suit.to_string(),
            rank: rank.to_string(),
        };
        let parsed_suit: Suit = suit.parse().map_err(|_| invalid())?;
        let parsed_rank = if parsed_suit.is_numbered() {
            match rank.as_bytes() {
                [digit] if digit.is_ascii_digit() => Rank::Number(digit - b'0'),
                _ => return Err(invalid()),
            }
        } else {
            Rank::Honor(rank.parse::<HonorKind>().map_err(|_| invalid())?)
        };
        Self::new(parsed_suit, parsed_rank).map_err(|_| invalid())
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Numeric rank, if this is a numbered tile.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self.rank {
            Rank::Number(n) => Some(n),
            Rank::Honor(_) => None,
        }
    }

    /// Honor kind, if this is an honor tile.
    #[must_use]
    pub const fn honor_kind(self) -> Option<HonorKind> {
        match self.rank {
            Rank::Number(_) => None,
            Rank::Honor(kind) => Some(kind),
        }
    }

    /// Dense index in 0..34 (characters, circles, bamboo, honors).
    #[must_use]
    pub const fn index(self) -> usize {
        match self.rank {
            Rank::Number(n) => self.suit.offset() + n as usize - 1,
            Rank::Honor(kind) => HONOR_OFFSET + kind as usize,
        }
    }

    /// Terminal (1 or 9) or honor tile.
    #[must_use]
    pub const fn is_terminal_or_honor(self) -> bool {
        match self.rank {
            Rank::Number(n) => n == 1 || n == 9,
            Rank::Honor(_) => true,
        }
    }

    /// Stable identifier `"<suit>-<rank>"`, e.g. `"pin-5"` or `"honor-red"`.
    #[must_use]
    pub fn id(self) -> String {
        format!("{}-{}", self.suit.as_str(), self.rank)
    }

    /// English display name, e.g. `"Circles 5"` or `"Red"`.
    #[must_use]
    pub fn name(self) -> String {
        match self.rank {
            Rank::Number(n) => format!("{} {}", self.suit.name(), n),
            Rank::Honor(kind) => kind.name().to_string(),
        }
    }

    /// Digit used for this tile in compact notation (honors count 1..=7).
    pub(crate) const fn notation_digit(self) -> u8 {
        match self.rank {
            Rank::Number(n) => n,
            Rank::Honor(kind) => kind as u8 + 1,
        }
    }

    /// Tile for a digit/suit-letter pair in compact notation.
    ///
    /// `0` stands for a red five and maps to the plain five.
    pub(crate) fn from_notation(digit: u8, suit: char) -> Option<Self> {
        let suit = Suit::from_notation(suit)?;
        match (suit, digit) {
            (Suit::Honor, 1..=7) => Some(Self::honor(HonorKind::ALL[digit as usize - 1])),
            (Suit::Honor, _) => None,
            (_, 0) => Self::numbered(suit, 5).ok(),
            (_, _) => Self::numbered(suit, digit).ok(),
        }
    }
}

/// Create a tile from a suit and rank.
///
/// Out-of-domain values fail fast with `TenpaiError::InvalidTile`.
pub fn create_tile(suit: Suit, rank: Rank) -> TenpaiResult<Tile> {
    Tile::new(suit, rank)
}

/// The 34 distinct tile identities in catalogue order.
pub fn all_distinct_tiles() -> impl Iterator<Item = Tile> + Clone {
    (0..TILE_KINDS).filter_map(Tile::from_index)
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit.as_str(), self.rank)
    }
}

impl FromStr for Tile {
    type Err = TenpaiError;

    /// Parse a tile id such as `"sou-9"` or `"honor-white"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = s.split_once('-').ok_or_else(|| TenpaiError::Parse {
            input: s.to_string(),
            message: "expected '<suit>-<rank>'".to_string(),
        })?;
        Self::from_record(suit, rank).map_err(|e| TenpaiError::Parse {
            input: s.to_string(),
            message: e.to_string(),
        })
    }
}

/// Serialized tile shape: `{"type": "man", "value": 1}`.
#[derive(Serialize, Deserialize)]
struct RawTile {
    #[serde(rename = "type")]
    suit: Suit,
    value: Rank,
}

impl TryFrom<RawTile> for Tile {
    type Error = TenpaiError;

    fn try_from(raw: RawTile) -> Result<Self, Self::Error> {
        Tile::new(raw.suit, raw.value)
    }
}

impl From<Tile> for RawTile {
    fn from(tile: Tile) -> Self {
        Self {
            suit: tile.suit,
            value: tile.rank,
        }
    }
}

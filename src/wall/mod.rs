//! Tile walls: seeded shuffling and random hand dealing.

pub mod rng;
#[allow(clippy::module_inception)]
pub mod wall;

pub use rng::WallRng;
pub use wall::{random_hand, random_hands, TileWall, WALL_SIZE};

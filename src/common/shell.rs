//! Definitions for the primary damaging projectile

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::utils::Vector2;

/// Moving state of a shell in flight.
///
/// Velocity is fixed at spawn: constant magnitude, constant direction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ShellData {
    pub velocity: Vector2,
}

/// Spawn offset and draw rotation that place a shell at the muzzle of a
/// tank facing `direction`.
///
/// The fire position is the muzzle point; the offset shifts the sprite's
/// top-left corner so the shell emerges centered on the barrel, and the
/// rotation turns the (north-facing) shell image to match.
pub fn muzzle_transform(direction: Direction, size: Vector2) -> (Vector2, f64) {
    match direction {
        Direction::West => (Vector2::new(-size.x * 1.5, -size.y / 2.0), 90.0),
        Direction::North => (Vector2::new(-size.x / 2.0, -size.y), 0.0),
        Direction::South => (Vector2::new(-size.x / 2.0, 0.0), 180.0),
        Direction::East => (Vector2::new(0.0, -size.y / 2.0), -90.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muzzle_offsets_per_facing() {
        let size = Vector2::new(8.0, 16.0);

        let (west, rot) = muzzle_transform(Direction::West, size);
        assert_eq!(west, Vector2::new(-12.0, -8.0));
        assert_eq!(rot, 90.0);

        let (north, rot) = muzzle_transform(Direction::North, size);
        assert_eq!(north, Vector2::new(-4.0, -16.0));
        assert_eq!(rot, 0.0);

        let (south, rot) = muzzle_transform(Direction::South, size);
        assert_eq!(south, Vector2::new(-4.0, 0.0));
        assert_eq!(rot, 180.0);

        let (east, rot) = muzzle_transform(Direction::East, size);
        assert_eq!(east, Vector2::new(0.0, -8.0));
        assert_eq!(rot, -90.0);
    }
}

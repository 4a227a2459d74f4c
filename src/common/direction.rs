use serde::{Deserialize, Serialize};

use crate::utils::Vector2;

/// Cardinal facing in screen space, where +y points down
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn unit(&self) -> Vector2 {
        match self {
            Direction::North => Vector2 { x: 0.0, y: -1.0 },
            Direction::South => Vector2 { x: 0.0, y: 1.0 },
            Direction::East => Vector2 { x: 1.0, y: 0.0 },
            Direction::West => Vector2 { x: -1.0, y: 0.0 },
        }
    }

    pub fn to_vector(&self, speed: f64) -> Vector2 {
        self.unit().scale(speed)
    }
}

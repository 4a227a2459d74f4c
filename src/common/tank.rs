//! Player-controlled tank state

use serde::{Deserialize, Serialize};

use super::constants::TANK_FRAMES_PER_SKIN;
use super::controls::ControlScheme;
use super::direction::Direction;
use crate::utils::Vector2;

/// Data the scene tracks for a player tank
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TankData {
    pub scheme: ControlScheme,
    /// Zero while idle or blocked
    pub velocity: Vector2,
    /// First frame of this tank's skin within the shared sheet
    pub frame_base: usize,
}

impl TankData {
    /// `default_scheme` selects both the control scheme and the skin:
    /// frames 0..4 for the default player, 4..8 for the alternative one
    pub fn new(default_scheme: bool) -> Self {
        Self {
            scheme: if default_scheme {
                ControlScheme::default()
            } else {
                ControlScheme::alternative()
            },
            velocity: Vector2::zero(),
            frame_base: if default_scheme {
                0
            } else {
                TANK_FRAMES_PER_SKIN
            },
        }
    }
}

/// Frame offset within a skin for a facing: up, left, down, right
pub fn facing_frame(direction: Direction) -> usize {
    match direction {
        Direction::North => 0,
        Direction::West => 1,
        Direction::South => 2,
        Direction::East => 3,
    }
}

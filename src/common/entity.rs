//! Entities stored in the scene arena

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleKind;
use super::shell::ShellData;
use super::tank::TankData;
use crate::utils::{Rect, Vector2};

/// Stable handle into the scene's entity arena.
///
/// Handles stay valid across unrelated removals; a handle whose entity has
/// been killed simply resolves to nothing.
pub type EntityId = generational_arena::Index;

/// Bitmask of collision-domain tags.
///
/// Two entities interact only when their masks share at least one bit.
/// [`DomainMask::COMBAT`] covers the standard obstacle/shell/tank domain;
/// the embedding game is free to define further bits.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DomainMask(pub u32);

impl DomainMask {
    pub const EMPTY: Self = Self(0);
    pub const COMBAT: Self = Self(1);

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn shares_any(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for DomainMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DomainMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Opaque drawable handle: the asset layer owns the pixels, the simulation
/// only tracks which frame is showing, how it is rotated, and how big it is
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Pre-scaled frame size reported by the asset layer
    pub size: Vector2,
    /// Frame index within the entity's sheet
    pub frame: usize,
    /// Rotation applied at draw time, counterclockwise degrees
    pub rotation_deg: f64,
}

impl Sprite {
    pub fn new(size: Vector2) -> Self {
        Self {
            size,
            frame: 0,
            rotation_deg: 0.0,
        }
    }
}

/// Pre-scaled frame sizes for each entity family, supplied by the asset
/// layer at scene construction
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct SpriteSizes {
    pub obstacle: Vector2,
    pub tank: Vector2,
    pub shell: Vector2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            obstacle: Vector2::new(32.0, 32.0),
            tank: Vector2::new(32.0, 32.0),
            shell: Vector2::new(8.0, 16.0),
        }
    }
}

/// Behavior family of an entity; collision outcomes dispatch exhaustively
/// over pairs of these
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum EntityKind {
    Obstacle(ObstacleKind),
    Shell(ShellData),
    Tank(TankData),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Entity {
    /// Continuous screen-space position of the sprite's top-left corner
    pub position: Vector2,
    pub sprite: Sprite,
    pub domains: DomainMask,
    pub kind: EntityKind,
}

impl Entity {
    /// Axis-aligned bounds at the current position
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.sprite.size.x,
            self.sprite.size.y,
        )
    }
}

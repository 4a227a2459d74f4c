//! Control scheme contract for player tanks
//!
//! The window layer feeds raw key presses into an [`InputState`]; a tank
//! polls its own [`ControlScheme`] against that state once per frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Keys currently held down, stored in UPPERCASE
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct InputState {
    keys_down: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys_down.insert(key.to_uppercase());
    }

    pub fn release(&mut self, key: &str) {
        self.keys_down.remove(&key.to_uppercase());
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.keys_down.contains(&key.to_uppercase())
    }
}

/// Named binding of four physical keys to the directional queries
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ControlScheme {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl ControlScheme {
    /// The "default" configuration: arrow keys
    pub fn default() -> Self {
        Self {
            up: String::from("ARROWUP"),
            down: String::from("ARROWDOWN"),
            left: String::from("ARROWLEFT"),
            right: String::from("ARROWRIGHT"),
        }
    }

    /// The "alternative" configuration: WASD
    pub fn alternative() -> Self {
        Self {
            up: String::from("W"),
            down: String::from("S"),
            left: String::from("A"),
            right: String::from("D"),
        }
    }

    pub fn up_pressed(&self, input: &InputState) -> bool {
        input.is_down(&self.up)
    }

    pub fn down_pressed(&self, input: &InputState) -> bool {
        input.is_down(&self.down)
    }

    pub fn left_pressed(&self, input: &InputState) -> bool {
        input.is_down(&self.left)
    }

    pub fn right_pressed(&self, input: &InputState) -> bool {
        input.is_down(&self.right)
    }

    /// First pressed direction in priority order up, down, right, left.
    ///
    /// Exactly one direction wins per frame, so simultaneous presses never
    /// produce diagonal movement.
    pub fn steer(&self, input: &InputState) -> Option<Direction> {
        if self.up_pressed(input) {
            Some(Direction::North)
        } else if self.down_pressed(input) {
            Some(Direction::South)
        } else if self.right_pressed(input) {
            Some(Direction::East)
        } else if self.left_pressed(input) {
            Some(Direction::West)
        } else {
            None
        }
    }
}

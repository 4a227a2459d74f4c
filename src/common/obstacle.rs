//! Static obstacle variants and their collision flags

use serde::{Deserialize, Serialize};

/// Grid-aligned stationary scenery placed at level load
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    ConcreteWall,
    BrickWall,
    Bush,
    Water,
}

/// Immutable collision behavior of an obstacle variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleFlags {
    /// A shell hit removes the obstacle
    pub destroyable: bool,
    /// Tanks cannot drive through
    pub tank_obstacle: bool,
    /// Shells cannot fly through
    pub shell_obstacle: bool,
}

impl ObstacleKind {
    /// Flag table per variant:
    ///
    /// | kind         | destroyable | tank | shell |
    /// |--------------|-------------|------|-------|
    /// | ConcreteWall | no          | yes  | yes   |
    /// | BrickWall    | yes         | yes  | yes   |
    /// | Bush         | no          | no   | no    |
    /// | Water        | no          | yes  | no    |
    pub const fn flags(self) -> ObstacleFlags {
        match self {
            ObstacleKind::ConcreteWall => ObstacleFlags {
                destroyable: false,
                tank_obstacle: true,
                shell_obstacle: true,
            },
            ObstacleKind::BrickWall => ObstacleFlags {
                destroyable: true,
                tank_obstacle: true,
                shell_obstacle: true,
            },
            ObstacleKind::Bush => ObstacleFlags {
                destroyable: false,
                tank_obstacle: false,
                shell_obstacle: false,
            },
            ObstacleKind::Water => ObstacleFlags {
                destroyable: false,
                tank_obstacle: true,
                shell_obstacle: false,
            },
        }
    }

    /// Display character used in level files
    pub const fn to_char(self) -> char {
        match self {
            ObstacleKind::ConcreteWall => '#',
            ObstacleKind::BrickWall => '%',
            ObstacleKind::Bush => '*',
            ObstacleKind::Water => '~',
        }
    }

    pub fn from_char(sym: char) -> Option<Self> {
        match sym {
            '#' => Some(ObstacleKind::ConcreteWall),
            '%' => Some(ObstacleKind::BrickWall),
            '*' => Some(ObstacleKind::Bush),
            '~' => Some(ObstacleKind::Water),
            _ => None,
        }
    }
}

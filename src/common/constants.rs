//! Up front configuration values

/// The number of cells in the field horizontally
pub const FIELD_COLS: u32 = 22;
/// The number of cells in the field vertically
pub const FIELD_ROWS: u32 = 17;
/// Side length of a grid cell in screen units
pub const CELL_SIZE: f64 = 32.0;

/// Speed of a Shell in screen units per second
pub const SHELL_SPEED: f64 = 100.0;

/// Speed of a Tank in screen units per second while moving
pub const TANK_SPEED: f64 = 50.0;
/// Total frames in the shared tank sprite sheet
pub const TANK_FRAME_COUNT: usize = 8;
/// Frames per tank skin, one per facing
pub const TANK_FRAMES_PER_SKIN: usize = 4;

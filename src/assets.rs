//! Level-file parsing
//!
//! Levels are plain text: rows of display characters, one per grid cell,
//! using the obstacle characters `#` `%` `*` `~` with `.` (or a space) for
//! an empty cell.

use std::collections::HashMap;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::common::obstacle::ObstacleKind;

/// Obstacle placements parsed from one level: `(col, row, kind)`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Level {
    pub tiles: Vec<(u32, u32, ObstacleKind)>,
}

/// Parse a file holding one or more named levels.
///
/// # Example
///
/// file contents:
/// ```plaintext
/// @LEVEL_NAME
/// ##########
/// ..%%..*~..
/// ..........
/// @
/// ```
///
/// you can have multiple definitions of a level in a single level file
pub fn parse_levels(bytes: &[u8]) -> Result<HashMap<String, Level>, anyhow::Error> {
    const LEVEL_DELIMITER: char = '@';

    let mut levels = HashMap::new();

    let mut reading = false;
    let mut level_row = 0;
    let mut current_entry = (String::default(), Level::default());

    for (line_no, line) in std::str::from_utf8(bytes)?.lines().enumerate() {
        if line.starts_with(LEVEL_DELIMITER) {
            if reading {
                levels.insert(current_entry.0, current_entry.1);
                current_entry = (String::default(), Level::default());
            } else {
                current_entry.0 = String::from(&line[1..]);
                level_row = 0;
            }

            // toggle reading state
            reading = !reading;
        } else if reading {
            for (col, sym) in line.chars().enumerate() {
                match ObstacleKind::from_char(sym) {
                    Some(kind) => {
                        current_entry.1.tiles.push((col as u32, level_row, kind));
                    }
                    None if sym == '.' || sym == ' ' => {}
                    None => bail!(
                        "unknown tile character {:?} at line {}, column {}",
                        sym,
                        line_no + 1,
                        col + 1
                    ),
                }
            }
            level_row += 1;
        }
    }

    Ok(levels)
}

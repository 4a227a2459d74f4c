pub mod assets;
pub mod common;
pub mod grid;
pub mod utils;

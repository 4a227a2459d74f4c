pub mod constants;
pub mod controls;
pub mod direction;
pub mod entity;
pub mod obstacle;
pub mod scene;
pub mod shell;
pub mod tank;

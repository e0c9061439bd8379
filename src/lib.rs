pub mod camera;
pub mod color;
pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod rect;

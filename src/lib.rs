//! Procedural generator for the hexagon application icon.

pub mod draw;
pub mod geometry;
pub mod icon_gen;
pub mod manifest;
pub mod palette;
pub mod render;

pub use render::render;

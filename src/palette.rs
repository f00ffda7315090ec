//! Fixed colors and size-relative proportions of the icon design.

use image::{Rgb, Rgba};

/// Gradient color at the center of the canvas.
pub const GRADIENT_START: Rgb<u8> = Rgb([37, 99, 235]);
/// Gradient color at the corners.
pub const GRADIENT_END: Rgb<u8> = Rgb([15, 23, 42]);

pub const HEXAGON_STROKE: Rgb<u8> = Rgb([147, 197, 253]);
pub const SPOKE_STROKE: Rgb<u8> = Rgb([96, 165, 250]);

pub const NODE_FILL: Rgb<u8> = Rgb([96, 165, 250]);
pub const NODE_OUTLINE: Rgb<u8> = Rgb([255, 255, 255]);

pub const CENTER_FILL: Rgb<u8> = Rgb([255, 255, 255]);
pub const CENTER_OUTLINE: Rgb<u8> = Rgb([29, 78, 216]);

/// White with roughly 25% opacity.
pub const SHINE: Rgba<u8> = Rgba([255, 255, 255, 64]);

// Proportions, all relative to the icon size.
pub const HEXAGON_RADIUS: f32 = 0.35;
pub const HEXAGON_STROKE_WIDTH: f32 = 1.0 / 40.0;
pub const SPOKE_WIDTH: f32 = 1.0 / 64.0;
pub const NODE_RADIUS: f32 = 0.065;
pub const NODE_OUTLINE_WIDTH: f32 = 1.0 / 64.0;
pub const CENTER_RADIUS: f32 = 0.12;
pub const CENTER_OUTLINE_WIDTH: f32 = 1.0 / 40.0;
pub const CORNER_RADIUS: f32 = 0.22;

pub const SHINE_CENTER_Y: f32 = 0.26;
pub const SHINE_RADIUS_X: f32 = 0.38;
pub const SHINE_RADIUS_Y: f32 = 0.16;

/// Scale a proportion by `size`, never going below one pixel.
pub fn scaled(size: u32, proportion: f32) -> f32 {
    (size as f32 * proportion).max(1.0)
}

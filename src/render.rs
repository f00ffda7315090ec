//! Procedural rendering of the hexagon icon.
//!
//! A render is a pure function of the requested size: radial gradient, the
//! hexagon/node graphic on top, rounded corners cut out through a mask and,
//! for large enough sizes, a glossy highlight.

use crate::draw::{self, cap_to_mask, clip_to_mask, composite_over, rounded_rect_mask};
use crate::geometry::{canvas_center, hexagon_vertices, Point};
use crate::palette::{self, scaled};
use image::{GrayImage, Rgb, Rgba, RgbaImage};

/// Sizes up to and including this one are rendered without the shine.
pub const SHINE_MIN_SIZE: u32 = 32;

/// Render the finished icon at `size` × `size`.
pub fn render(size: u32) -> RgbaImage {
    let mask = rounded_mask(size);
    let mut icon = composite(size, &mask);

    if size > SHINE_MIN_SIZE {
        apply_shine(&mut icon, &mask);
    }

    icon
}

/// Render the icon without the shine highlight.
pub fn render_base(size: u32) -> RgbaImage {
    composite(size, &rounded_mask(size))
}

fn composite(size: u32, mask: &GrayImage) -> RgbaImage {
    let mut canvas = radial_gradient(size, palette::GRADIENT_START, palette::GRADIENT_END);
    draw_graphic(&mut canvas);
    clip_to_mask(&mut canvas, mask);

    log::debug!(
        "rendered {size}x{size}: hexagon radius {:.2}, corner radius {:.2}",
        size as f32 * palette::HEXAGON_RADIUS,
        size as f32 * palette::CORNER_RADIUS
    );

    canvas
}

/// Opaque radial gradient going from `start` at the center to `end` at the
/// corners.
///
/// Pixels are sampled at their integer coordinates rather than their
/// centers, so for even sizes pixel `(size/2, size/2)` is exactly `start` and
/// pixel `(0, 0)` is exactly `end`. The trade-off is a half pixel shift
/// towards the bottom right relative to the graphic: the last row and column
/// never quite reach `end`.
pub fn radial_gradient(size: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbaImage {
    let center = canvas_center(size);
    let max_distance = center.distance(Point::new(0.0, 0.0));

    RgbaImage::from_fn(size, size, |x, y| {
        let distance = center.distance(Point::new(x as f32, y as f32));
        let ratio = if max_distance > 0.0 {
            (distance / max_distance).min(1.0)
        } else {
            0.0
        };

        let mut pixel = Rgba([start[0], start[1], start[2], 255]);
        for c in 0..3 {
            let from = start[c] as f32;
            let to = end[c] as f32;
            pixel[c] = (from + (to - from) * ratio).round() as u8;
        }
        pixel
    })
}

/// Draw the hexagon, spokes, nodes and center circle onto `canvas`.
pub fn draw_graphic(canvas: &mut RgbaImage) {
    let size = canvas.width();
    let center = canvas_center(size);
    let vertices = hexagon_vertices(center, size as f32 * palette::HEXAGON_RADIUS);

    let spoke_width = scaled(size, palette::SPOKE_WIDTH);
    for &vertex in &vertices {
        draw::draw_line(canvas, center, vertex, spoke_width, palette::SPOKE_STROKE);
    }

    draw::draw_polygon(
        canvas,
        &vertices,
        scaled(size, palette::HEXAGON_STROKE_WIDTH),
        palette::HEXAGON_STROKE,
    );

    let node_radius = scaled(size, palette::NODE_RADIUS);
    let node_outline = scaled(size, palette::NODE_OUTLINE_WIDTH);
    for &vertex in &vertices {
        draw::outlined_circle(
            canvas,
            vertex,
            node_radius,
            palette::NODE_FILL,
            palette::NODE_OUTLINE,
            node_outline,
        );
    }

    draw::outlined_circle(
        canvas,
        center,
        scaled(size, palette::CENTER_RADIUS),
        palette::CENTER_FILL,
        palette::CENTER_OUTLINE,
        scaled(size, palette::CENTER_OUTLINE_WIDTH),
    );
}

/// Rounded-rectangle silhouette of the icon.
pub fn rounded_mask(size: u32) -> GrayImage {
    rounded_rect_mask(size, size as f32 * palette::CORNER_RADIUS)
}

fn apply_shine(icon: &mut RgbaImage, mask: &GrayImage) {
    let size = icon.width();
    let s = size as f32;

    let mut shine = RgbaImage::new(size, size);
    draw::fill_ellipse(
        &mut shine,
        Point::new(s / 2.0, s * palette::SHINE_CENTER_Y),
        s * palette::SHINE_RADIUS_X,
        s * palette::SHINE_RADIUS_Y,
        palette::SHINE,
    );
    clip_to_mask(&mut shine, mask);

    for (dst, src) in icon.pixels_mut().zip(shine.pixels()) {
        composite_over(dst, *src);
    }
    // The base is already clipped, so only cap what the shine raised.
    cap_to_mask(icon, mask);
}

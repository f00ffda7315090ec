//! Antialiased drawing primitives over `image` buffers.
//!
//! Every shape is described by a signed distance from a pixel center to the
//! shape's edge (negative inside). The distance is turned into a coverage
//! value with a one pixel wide linear falloff and the color is blended in
//! proportionally.

use crate::geometry::Point;
use image::{GrayImage, Luma, Rgb, Rgba, RgbaImage};

/// Fraction of a pixel covered by a shape whose edge is `signed_distance` away.
pub fn coverage(signed_distance: f32) -> f32 {
    (0.5 - signed_distance).clamp(0.0, 1.0)
}

/// Source-over blend of an opaque color with the given coverage.
/// The destination alpha is left untouched.
pub fn blend(pixel: &mut Rgba<u8>, color: Rgb<u8>, amount: f32) {
    if amount <= 0.0 {
        return;
    }
    for c in 0..3 {
        let dst = pixel[c] as f32;
        let src = color[c] as f32;
        pixel[c] = (dst + (src - dst) * amount).round() as u8;
    }
}

/// Source-over compositing of `src` onto `dst`, both with straight alpha.
pub fn composite_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src[3] as f32 / 255.0;
    if sa == 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for c in 0..3 {
        let value = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        dst[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Visit every pixel whose center lies within `[min, max]`, passing the
/// pixel center to `f`.
fn for_each_in_bounds<F>(img: &mut RgbaImage, min: Point, max: Point, mut f: F)
where
    F: FnMut(&mut Rgba<u8>, Point),
{
    let x0 = min.x.floor().max(0.0) as u32;
    let y0 = min.y.floor().max(0.0) as u32;
    let x1 = (max.x.ceil().max(0.0) as u32).min(img.width());
    let y1 = (max.y.ceil().max(0.0) as u32).min(img.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            f(img.get_pixel_mut(x, y), center);
        }
    }
}

pub fn fill_circle(img: &mut RgbaImage, center: Point, radius: f32, color: Rgb<u8>) {
    let reach = radius + 1.0;
    for_each_in_bounds(
        img,
        Point::new(center.x - reach, center.y - reach),
        Point::new(center.x + reach, center.y + reach),
        |pixel, p| blend(pixel, color, coverage(p.distance(center) - radius)),
    );
}

/// Filled circle with an outline of `width` pixels drawn inside its radius.
pub fn outlined_circle(
    img: &mut RgbaImage,
    center: Point,
    radius: f32,
    fill: Rgb<u8>,
    outline: Rgb<u8>,
    width: f32,
) {
    fill_circle(img, center, radius, outline);
    let inner = radius - width;
    if inner > 0.0 {
        fill_circle(img, center, inner, fill);
    }
}

/// Distance from `p` to the segment `a`-`b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + abx * t, a.y + aby * t))
}

/// Thick line with round caps, so consecutive segments join smoothly.
pub fn draw_line(img: &mut RgbaImage, a: Point, b: Point, width: f32, color: Rgb<u8>) {
    let half = width / 2.0;
    let reach = half + 1.0;
    for_each_in_bounds(
        img,
        Point::new(a.x.min(b.x) - reach, a.y.min(b.y) - reach),
        Point::new(a.x.max(b.x) + reach, a.y.max(b.y) + reach),
        |pixel, p| blend(pixel, color, coverage(segment_distance(p, a, b) - half)),
    );
}

/// Closed outline through `points`.
pub fn draw_polygon(img: &mut RgbaImage, points: &[Point], width: f32, color: Rgb<u8>) {
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_line(img, a, b, width, color);
    }
}

/// Axis-aligned ellipse blended over the existing pixels, honouring the
/// color's own alpha.
pub fn fill_ellipse(img: &mut RgbaImage, center: Point, rx: f32, ry: f32, color: Rgba<u8>) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let scale = rx.min(ry);
    for_each_in_bounds(
        img,
        Point::new(center.x - rx - 1.0, center.y - ry - 1.0),
        Point::new(center.x + rx + 1.0, center.y + ry + 1.0),
        |pixel, p| {
            let nx = (p.x - center.x) / rx;
            let ny = (p.y - center.y) / ry;
            // Approximate edge distance, exact on the axes.
            let distance = ((nx * nx + ny * ny).sqrt() - 1.0) * scale;
            let alpha = (color[3] as f32 * coverage(distance)).round() as u8;
            if alpha > 0 {
                composite_over(pixel, Rgba([color[0], color[1], color[2], alpha]));
            }
        },
    );
}

/// Single channel mask of a rounded rectangle filling the whole canvas.
pub fn rounded_rect_mask(size: u32, radius: f32) -> GrayImage {
    let half = size as f32 / 2.0;
    let radius = radius.clamp(0.0, half);
    let inner = half - radius;

    GrayImage::from_fn(size, size, |x, y| {
        let qx = (x as f32 + 0.5 - half).abs() - inner;
        let qy = (y as f32 + 0.5 - half).abs() - inner;
        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        let inside = qx.max(qy).min(0.0);
        let distance = outside + inside - radius;
        Luma([(coverage(distance) * 255.0).round() as u8])
    })
}

/// Multiply every pixel's alpha by the mask value at the same position.
pub fn clip_to_mask(img: &mut RgbaImage, mask: &GrayImage) {
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let m = mask.get_pixel(x, y)[0] as u32;
        pixel[3] = ((pixel[3] as u32 * m + 127) / 255) as u8;
    }
}

/// Lower every pixel's alpha to at most the mask value at the same position.
///
/// Unlike `clip_to_mask` this is idempotent, so it can be applied to an
/// image that was already clipped without thinning its antialiased edge.
pub fn cap_to_mask(img: &mut RgbaImage, mask: &GrayImage) {
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        pixel[3] = pixel[3].min(mask.get_pixel(x, y)[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_falloff() {
        assert_eq!(coverage(-2.0), 1.0);
        assert_eq!(coverage(0.0), 0.5);
        assert_eq!(coverage(2.0), 0.0);
    }

    #[test]
    fn test_fill_circle_covers_center_only() {
        let mut img = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));
        fill_circle(&mut img, Point::new(10.0, 10.0), 4.0, Rgb([255, 0, 0]));

        assert_eq!(*img.get_pixel(10, 10), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(19, 10), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_outlined_circle_keeps_fill_inside() {
        let mut img = RgbaImage::from_pixel(40, 40, Rgba([0, 0, 0, 255]));
        outlined_circle(
            &mut img,
            Point::new(20.0, 20.0),
            10.0,
            Rgb([255, 255, 255]),
            Rgb([0, 0, 255]),
            3.0,
        );

        assert_eq!(*img.get_pixel(20, 20), Rgba([255, 255, 255, 255]));
        // Pixel center (28.5, 20.5) sits inside the outline band.
        assert_eq!(*img.get_pixel(28, 20), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_draw_line_is_clipped_to_canvas() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        draw_line(
            &mut img,
            Point::new(-5.0, 5.0),
            Point::new(15.0, 5.0),
            2.0,
            Rgb([0, 255, 0]),
        );

        for x in 0..10 {
            assert_eq!(img.get_pixel(x, 4)[1], 255);
            assert_eq!(img.get_pixel(x, 0)[1], 0);
        }
    }

    #[test]
    fn test_rounded_rect_mask_corners_and_center() {
        let mask = rounded_rect_mask(64, 14.0);

        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(63, 0)[0], 0);
        assert_eq!(mask.get_pixel(0, 63)[0], 0);
        assert_eq!(mask.get_pixel(63, 63)[0], 0);
        assert_eq!(mask.get_pixel(32, 32)[0], 255);
        // Edge midpoints are inside the straight part of the border.
        assert_eq!(mask.get_pixel(32, 0)[0], 255);
        assert_eq!(mask.get_pixel(0, 32)[0], 255);
    }

    #[test]
    fn test_fill_ellipse_respects_alpha() {
        let mut img = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));
        fill_ellipse(
            &mut img,
            Point::new(10.0, 10.0),
            6.0,
            3.0,
            Rgba([255, 255, 255, 128]),
        );

        let inside = img.get_pixel(10, 10);
        assert!(inside[0] > 100 && inside[0] < 160);
        assert_eq!(inside[3], 255);
        assert_eq!(*img.get_pixel(10, 17), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_composite_over_keeps_opaque_destination() {
        let mut dst = Rgba([0, 0, 0, 255]);
        composite_over(&mut dst, Rgba([255, 255, 255, 64]));
        assert_eq!(dst[3], 255);
        assert_eq!(dst[0], 64);

        let mut untouched = Rgba([1, 2, 3, 255]);
        composite_over(&mut untouched, Rgba([255, 255, 255, 0]));
        assert_eq!(untouched, Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_clip_to_mask() {
        let mut img = RgbaImage::from_pixel(32, 32, Rgba([10, 20, 30, 255]));
        let mask = rounded_rect_mask(32, 8.0);
        clip_to_mask(&mut img, &mask);

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(16, 16)[3], 255);
    }

    #[test]
    fn test_cap_to_mask_is_idempotent_on_clipped_image() {
        let mask = rounded_rect_mask(32, 8.0);
        let mut img = RgbaImage::from_pixel(32, 32, Rgba([10, 20, 30, 255]));
        clip_to_mask(&mut img, &mask);
        let clipped = img.clone();

        cap_to_mask(&mut img, &mask);
        assert_eq!(img, clipped);

        let edge_alphas = mask.pixels().filter(|m| m[0] > 0 && m[0] < 255).count();
        assert!(edge_alphas > 0, "mask should have an antialiased edge");
    }

    #[test]
    fn test_cap_to_mask_lowers_alpha_above_mask() {
        let mask = GrayImage::from_pixel(2, 1, Luma([100]));
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 40]));
        cap_to_mask(&mut img, &mask);

        assert_eq!(img.get_pixel(0, 0)[3], 100);
        assert_eq!(img.get_pixel(1, 0)[3], 40);
    }
}

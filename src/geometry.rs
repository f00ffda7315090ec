use std::f32::consts::PI;

/// A position in image space, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Center of a square canvas of the given size.
pub fn canvas_center(size: u32) -> Point {
    let half = size as f32 / 2.0;
    Point::new(half, half)
}

/// Vertices of a regular hexagon around `center`.
///
/// Vertices sit at `k * 60°` starting from the positive x axis, which leaves
/// the top and bottom edges horizontal.
pub fn hexagon_vertices(center: Point, radius: f32) -> [Point; 6] {
    std::array::from_fn(|k| {
        let angle = k as f32 * PI / 3.0;
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    })
}

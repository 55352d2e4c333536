//! Edge function-based triangle rasterization.
//!
//! The algorithm tests each pixel of the triangle's bounding box against
//! three edge equations. For an edge from point A to point B, the edge
//! function at point P is:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! A pixel is inside when all three edge functions share the sign of the
//! triangle's signed area, so both windings are filled. The normalized edge
//! values are the barycentric weights used to interpolate depth.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)
//! - Scratchapixel: <https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation>

use super::framebuffer::FrameBuffer;
use crate::math::vec3::Vec3;

/// A triangle in window space: `x`/`y` in pixels (y down), `z` depth in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Vec3; 3],
    /// ARGB8888
    pub color: u32,
}

impl ScreenTriangle {
    pub fn new(points: [Vec3; 3], color: u32) -> Self {
        Self { points, color }
    }
}

/// Computes the edge function value for point P relative to edge (A -> B).
#[inline]
fn edge_function(a: Vec3, b: Vec3, p: Vec3) -> f32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Fills `triangle` into `buffer` with a single color.
///
/// With `depth_test` the interpolated depth must beat the stored value
/// (`LESS`); without it color is written unconditionally and depth is left
/// alone.
pub fn fill_triangle(triangle: &ScreenTriangle, buffer: &mut FrameBuffer, depth_test: bool) {
    let [v0, v1, v2] = triangle.points;

    // Bounding box, clipped to the framebuffer
    let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
    let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
    let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
    let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

    // Signed area (2x triangle area)
    let area = edge_function(v0, v1, v2);
    if area.abs() < f32::EPSILON {
        return; // Degenerate triangle
    }
    let inv_area = 1.0 / area;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            // Sample at pixel center
            let p = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);

            let w0 = edge_function(v1, v2, p);
            let w1 = edge_function(v2, v0, p);
            let w2 = edge_function(v0, v1, p);

            // Inside test (handles both CW and CCW winding)
            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };
            if !inside {
                continue;
            }

            if depth_test {
                let depth = (w0 * v0.z + w1 * v1.z + w2 * v2.z) * inv_area;
                buffer.set_pixel_with_depth(x, y, depth, triangle.color);
            } else {
                buffer.set_pixel(x, y, triangle.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::framebuffer::DEPTH_CLEAR;

    const W: u32 = 8;
    const H: u32 = 8;

    fn buffers() -> (Vec<u32>, Vec<f32>) {
        (vec![0; (W * H) as usize], vec![DEPTH_CLEAR; (W * H) as usize])
    }

    fn half_screen(z: f32, color: u32, clockwise: bool) -> ScreenTriangle {
        let (a, b, c) = (
            Vec3::new(0.0, 0.0, z),
            Vec3::new(8.0, 0.0, z),
            Vec3::new(0.0, 8.0, z),
        );
        if clockwise {
            ScreenTriangle::new([a, c, b], color)
        } else {
            ScreenTriangle::new([a, b, c], color)
        }
    }

    #[test]
    fn fills_both_windings_identically() {
        let (mut c1, mut d1) = buffers();
        let (mut c2, mut d2) = buffers();
        fill_triangle(
            &half_screen(0.5, 7, false),
            &mut FrameBuffer::new(&mut c1, &mut d1, W, H),
            true,
        );
        fill_triangle(
            &half_screen(0.5, 7, true),
            &mut FrameBuffer::new(&mut c2, &mut d2, W, H),
            true,
        );
        assert_eq!(c1, c2);
        assert!(c1.iter().filter(|&&c| c == 7).count() > 20);
        // Opposite corner is outside the triangle
        assert_eq!(c1[(W * H - 1) as usize], 0);
    }

    #[test]
    fn nearer_triangle_wins_regardless_of_order() {
        let (mut color, mut depth) = buffers();
        {
            let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
            fill_triangle(&half_screen(0.2, 1, false), &mut fb, true);
            fill_triangle(&half_screen(0.6, 2, false), &mut fb, true);
        }
        assert_eq!(color[0], 1);
        assert!((depth[0] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn without_depth_test_last_write_wins() {
        let (mut color, mut depth) = buffers();
        {
            let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
            fill_triangle(&half_screen(0.2, 1, false), &mut fb, false);
            fill_triangle(&half_screen(0.6, 2, false), &mut fb, false);
        }
        assert_eq!(color[0], 2);
        assert_eq!(depth[0], DEPTH_CLEAR);
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let (mut color, mut depth) = buffers();
        let line = ScreenTriangle::new(
            [
                Vec3::new(0.0, 0.0, 0.5),
                Vec3::new(4.0, 4.0, 0.5),
                Vec3::new(8.0, 8.0, 0.5),
            ],
            9,
        );
        fill_triangle(&line, &mut FrameBuffer::new(&mut color, &mut depth, W, H), true);
        assert!(color.iter().all(|&c| c == 0));
    }
}

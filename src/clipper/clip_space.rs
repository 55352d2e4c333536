//! Clip-space clipping against the homogeneous clip cube.
//!
//! Clipping occurs after projection (in homogeneous clip space), before the
//! perspective divide. The clip volume is defined by:
//!
//! ```text
//! -w <= x <= w
//! -w <= y <= w
//! -w <= z <= w   (OpenGL-style [-1, 1] depth range)
//! ```
//!
//! The planes are fixed, so the clipper never needs rebuilding when the
//! projection changes. Triangles are flat-colored, so only positions are
//! carried through the clipper.

use crate::math::vec4::Vec4;

/// The 6 planes of the canonical clip-space cube.
///
/// The signed distance is positive when inside the clip volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipPlane {
    /// Left plane: x >= -w
    Left,
    /// Right plane: x <= w
    Right,
    /// Bottom plane: y >= -w
    Bottom,
    /// Top plane: y <= w
    Top,
    /// Near plane: z >= -w
    Near,
    /// Far plane: z <= w
    Far,
}

impl ClipPlane {
    pub const ALL: [ClipPlane; 6] = [
        ClipPlane::Left,
        ClipPlane::Right,
        ClipPlane::Bottom,
        ClipPlane::Top,
        ClipPlane::Near,
        ClipPlane::Far,
    ];

    /// Returns the signed distance from a vertex to this plane.
    /// Positive = inside the clip volume, Negative = outside.
    pub fn signed_distance(&self, p: Vec4) -> f32 {
        match self {
            Self::Left => p.w + p.x,   // x >= -w  =>  w + x >= 0
            Self::Right => p.w - p.x,  // x <= w   =>  w - x >= 0
            Self::Bottom => p.w + p.y, // y >= -w  =>  w + y >= 0
            Self::Top => p.w - p.y,    // y <= w   =>  w - y >= 0
            Self::Near => p.w + p.z,   // z >= -w  =>  w + z >= 0
            Self::Far => p.w - p.z,    // z <= w   =>  w - z >= 0
        }
    }
}

/// A convex polygon in clip space.
///
/// Intermediate representation during clipping; triangulated back into a
/// fan for rasterization.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipSpacePolygon {
    pub vertices: Vec<Vec4>,
}

impl ClipSpacePolygon {
    pub fn from_triangle(v0: Vec4, v1: Vec4, v2: Vec4) -> Self {
        Self {
            vertices: vec![v0, v1, v2],
        }
    }

    /// Returns true if the polygon has been completely clipped away.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Clip this polygon against a single plane using the Sutherland-Hodgman algorithm.
    pub fn clip_against_plane(&self, plane: ClipPlane) -> Self {
        if self.is_empty() {
            return Self { vertices: vec![] };
        }

        let mut output = Vec::with_capacity(self.vertices.len() + 1);

        for i in 0..self.vertices.len() {
            let current = self.vertices[i];
            let next = self.vertices[(i + 1) % self.vertices.len()];

            let d1 = plane.signed_distance(current);
            let d2 = plane.signed_distance(next);

            let current_inside = d1 >= 0.0;
            let next_inside = d2 >= 0.0;

            if current_inside {
                output.push(current);

                if !next_inside {
                    // Leaving the volume
                    output.push(current.lerp(next, d1 / (d1 - d2)));
                }
            } else if next_inside {
                // Entering the volume
                output.push(current.lerp(next, d1 / (d1 - d2)));
            }
        }

        Self { vertices: output }
    }

    /// Fan triangulation of this convex polygon.
    pub fn triangulate(&self) -> impl Iterator<Item = [Vec4; 3]> + '_ {
        (1..self.vertices.len().saturating_sub(1))
            .map(move |i| [self.vertices[0], self.vertices[i], self.vertices[i + 1]])
    }
}

/// Clips polygons against all six planes of the clip cube.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipSpaceClipper;

impl ClipSpaceClipper {
    pub fn new() -> Self {
        Self
    }

    /// Returns the clipped polygon, which may be empty if the input
    /// polygon was entirely outside the clip volume.
    pub fn clip_polygon(&self, polygon: ClipSpacePolygon) -> ClipSpacePolygon {
        let mut result = polygon;

        for plane in ClipPlane::ALL {
            if result.is_empty() {
                break;
            }
            result = result.clip_against_plane(plane);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle(a: Vec4, b: Vec4, c: Vec4) -> ClipSpacePolygon {
        ClipSpacePolygon::from_triangle(a, b, c)
    }

    #[test]
    fn inside_triangle_is_untouched() {
        let tri = triangle(
            Vec4::new(-0.5, -0.5, 0.0, 1.0),
            Vec4::new(0.5, -0.5, 0.0, 1.0),
            Vec4::new(0.0, 0.5, 0.0, 1.0),
        );
        let clipped = ClipSpaceClipper::new().clip_polygon(tri.clone());
        assert_eq!(clipped, tri);
        assert_eq!(clipped.triangulate().count(), 1);
    }

    #[test]
    fn outside_triangle_is_dropped() {
        let tri = triangle(
            Vec4::new(2.0, 2.0, 0.0, 1.0),
            Vec4::new(3.0, 2.0, 0.0, 1.0),
            Vec4::new(2.0, 3.0, 0.0, 1.0),
        );
        let clipped = ClipSpaceClipper::new().clip_polygon(tri);
        assert!(clipped.is_empty());
        assert_eq!(clipped.triangulate().count(), 0);
    }

    #[test]
    fn crossing_the_right_plane_adds_a_vertex() {
        let tri = triangle(
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(2.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 0.5, 0.0, 1.0),
        );
        let clipped = tri.clip_against_plane(ClipPlane::Right);

        assert_eq!(clipped.vertices.len(), 4);
        assert!(clipped.vertices.iter().all(|v| v.x <= v.w + 1e-6));
        assert_relative_eq!(clipped.vertices[1].x, 1.0, epsilon = 1e-6);
        assert_eq!(clipped.triangulate().count(), 2);
    }
}

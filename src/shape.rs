//! Hardcoded flat-colored meshes.
//!
//! A [`Shape`] enumerates its triangles directly, with no index buffer and
//! no vertex sharing. Vertices are offsets of `±size` from the local origin
//! along each axis and never change after construction.

use crate::colors::{self, Color};
use crate::gfx::GraphicsContext;
use crate::math::vec3::Vec3;
use crate::transform::Transform;

/// Number of faces on a cube, and the length of a shape's palette.
pub const FACE_COUNT: usize = 6;

/// Default cube palette, indexed like [`CUBE_TRIANGLES`] faces.
pub const CUBE_PALETTE: [Color; FACE_COUNT] = [
    colors::RED,
    colors::YELLOW,
    colors::MAGENTA,
    colors::ORANGE,
    colors::DARK_RED,
    colors::PURPLE,
];

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

// OWNERSHIP: static data compiled into the binary, scaled by `size` at paint time.
//
// Unit cube corners at ±1. Two triangles per face, faces in palette order:
// back (-Z), left (-X), right (+X), front (+Z), top (+Y), bottom (-Y).
pub const CUBE_TRIANGLES: [[Vec3; 3]; FACE_COUNT * 2] = [
    // Back face
    [v(-1.0, -1.0, -1.0), v(1.0, -1.0, -1.0), v(-1.0, 1.0, -1.0)],
    [v(1.0, -1.0, -1.0), v(1.0, 1.0, -1.0), v(-1.0, 1.0, -1.0)],
    // Left face
    [v(-1.0, -1.0, 1.0), v(-1.0, -1.0, -1.0), v(-1.0, 1.0, 1.0)],
    [v(-1.0, 1.0, -1.0), v(-1.0, 1.0, 1.0), v(-1.0, -1.0, -1.0)],
    // Right face
    [v(1.0, -1.0, 1.0), v(1.0, -1.0, -1.0), v(1.0, 1.0, 1.0)],
    [v(1.0, 1.0, -1.0), v(1.0, 1.0, 1.0), v(1.0, -1.0, -1.0)],
    // Front face
    [v(-1.0, -1.0, 1.0), v(1.0, -1.0, 1.0), v(-1.0, 1.0, 1.0)],
    [v(1.0, -1.0, 1.0), v(1.0, 1.0, 1.0), v(-1.0, 1.0, 1.0)],
    // Top face
    [v(-1.0, 1.0, -1.0), v(-1.0, 1.0, 1.0), v(1.0, 1.0, -1.0)],
    [v(-1.0, 1.0, 1.0), v(1.0, 1.0, 1.0), v(1.0, 1.0, -1.0)],
    // Bottom face
    [v(-1.0, -1.0, -1.0), v(-1.0, -1.0, 1.0), v(1.0, -1.0, -1.0)],
    [v(-1.0, -1.0, 1.0), v(1.0, -1.0, 1.0), v(1.0, -1.0, -1.0)],
];

// A triangle in the z = 0 plane, counter-clockwise seen from +Z, followed by
// the same triangle wound the other way so it reads as double-sided.
pub const TRIANGLE_PAIR: [[Vec3; 3]; 2] = [
    [v(-1.0, -1.0, 0.0), v(1.0, -1.0, 0.0), v(-1.0, 1.0, 0.0)],
    [v(-1.0, -1.0, 0.0), v(-1.0, 1.0, 0.0), v(1.0, -1.0, 0.0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// 12 triangles, one palette color per face.
    Cube,
    /// A single double-sided triangle in the local XY plane.
    Triangle,
}

impl ShapeKind {
    fn unit_triangles(self) -> &'static [[Vec3; 3]] {
        match self {
            ShapeKind::Cube => &CUBE_TRIANGLES,
            ShapeKind::Triangle => &TRIANGLE_PAIR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    transform: Transform,
    size: f32,
    face_colors: [Color; FACE_COUNT],
}

impl Shape {
    /// A cube spanning `±size` on each axis with the default palette.
    pub fn cube(size: f32) -> Self {
        Self {
            kind: ShapeKind::Cube,
            transform: Transform::new(),
            size,
            face_colors: CUBE_PALETTE,
        }
    }

    /// A double-sided triangle spanning `±size` in x and y.
    pub fn triangle(size: f32, color: Color) -> Self {
        Self {
            kind: ShapeKind::Triangle,
            transform: Transform::new(),
            size,
            face_colors: [color; FACE_COUNT],
        }
    }

    pub fn with_face_colors(mut self, face_colors: [Color; FACE_COUNT]) -> Self {
        self.face_colors = face_colors;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Local-space triangles with their face color, in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = (Color, [Vec3; 3])> + '_ {
        self.kind
            .unit_triangles()
            .iter()
            .enumerate()
            .map(move |(i, tri)| {
                let color = self.face_colors[(i / 2) % FACE_COUNT];
                (color, (*tri).map(|corner| corner * self.size))
            })
    }

    pub fn vertex_count(&self) -> usize {
        self.kind.unit_triangles().len() * 3
    }

    /// Composes the model matrix onto the current model-view and emits
    /// every triangle. The caller owns the model-view stack; wrap this in
    /// push/pop to keep shapes independent.
    pub fn paint<G: GraphicsContext + ?Sized>(&self, ctx: &mut G) {
        ctx.mult_modelview(self.transform.matrix());
        for (color, vertices) in self.triangles() {
            ctx.draw_triangle(color, vertices);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::recording::{Call, RecordingContext};
    use crate::math::mat4::Mat4;

    #[test]
    fn cube_emits_36_vertices_at_half_extent() {
        let cube = Shape::cube(0.5);
        let triangles: Vec<_> = cube.triangles().collect();

        assert_eq!(triangles.len(), 12);
        assert_eq!(cube.vertex_count(), 36);

        let coords = triangles
            .iter()
            .flat_map(|(_, tri)| tri.iter())
            .flat_map(|p| [p.x, p.y, p.z]);
        for c in coords {
            assert!(c == 0.5 || c == -0.5, "coordinate {c} is not ±0.5");
        }
    }

    #[test]
    fn cube_faces_are_planar_and_colored_in_pairs() {
        let cube = Shape::cube(1.0);
        let triangles: Vec<_> = cube.triangles().collect();

        for (face, pair) in triangles.chunks(2).enumerate() {
            assert_eq!(pair[0].0, CUBE_PALETTE[face]);
            assert_eq!(pair[1].0, CUBE_PALETTE[face]);

            // All six vertices of a face share one constant axis.
            let points: Vec<Vec3> = pair.iter().flat_map(|(_, t)| *t).collect();
            let constant_axes = [
                points.iter().all(|p| p.x == points[0].x),
                points.iter().all(|p| p.y == points[0].y),
                points.iter().all(|p| p.z == points[0].z),
            ];
            assert_eq!(constant_axes.iter().filter(|&&c| c).count(), 1);
        }
    }

    #[test]
    fn front_face_is_counter_clockwise_from_positive_z() {
        let cube = Shape::cube(1.0);
        let (_, front) = cube.triangles().nth(6).unwrap();
        let normal = (front[1] - front[0]).cross(front[2] - front[0]);
        assert!(normal.z > 0.0);
    }

    #[test]
    fn recolored_cube_keeps_geometry() {
        let palette = [colors::PURPLE; FACE_COUNT];
        let plain = Shape::cube(1.0);
        let purple = Shape::cube(1.0).with_face_colors(palette);

        assert_eq!(purple.kind(), ShapeKind::Cube);
        assert_eq!(purple.size(), 1.0);
        assert!(purple.triangles().all(|(c, _)| c == colors::PURPLE));
        assert!(plain
            .triangles()
            .zip(purple.triangles())
            .all(|((_, a), (_, b))| a == b));
    }

    #[test]
    fn triangle_pair_is_double_sided() {
        let shape = Shape::triangle(2.0, colors::RED);
        let tris: Vec<_> = shape.triangles().collect();
        assert_eq!(tris.len(), 2);
        assert_eq!(shape.vertex_count(), 6);

        let normal = |t: &[Vec3; 3]| (t[1] - t[0]).cross(t[2] - t[0]);
        assert!(normal(&tris[0].1).z > 0.0);
        assert!(normal(&tris[1].1).z < 0.0);
        assert!(tris.iter().all(|(c, _)| *c == colors::RED));
    }

    #[test]
    fn paint_multiplies_model_then_draws_untransformed_vertices() {
        let mut cube = Shape::cube(0.5);
        cube.transform_mut().translate(Vec3::new(0.5, 0.5, 0.5));

        let mut ctx = RecordingContext::default();
        cube.paint(&mut ctx);

        assert_eq!(ctx.calls[0], Call::MultModelview(Mat4::translation(0.5, 0.5, 0.5)));
        let drawn: Vec<_> = ctx.calls[1..]
            .iter()
            .map(|call| match call {
                Call::DrawTriangle(color, vertices) => (*color, *vertices),
                other => panic!("unexpected call {other:?}"),
            })
            .collect();
        assert_eq!(drawn, cube.triangles().collect::<Vec<_>>());
    }
}

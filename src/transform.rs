//! Transform component for scene objects.
//!
//! A [`Transform`] is a single affine frame stored as a [`Mat4`]. The last
//! column holds the world-space position and columns 0-2 hold the local
//! left/up/forward axes. The frame only changes through [`Transform::translate`],
//! [`Transform::rotate`] and [`Transform::set_position`].

use crate::math::{mat4::Mat4, vec3::Vec3};

const LEFT: usize = 0;
const UP: usize = 1;
const FORWARD: usize = 2;
const POSITION: usize = 3;

/// An affine frame composed by right-multiplication.
///
/// Provides a fluent API where mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .translate(Vec3::new(0.0, 2.0, 10.0))
///     .rotate(PI, Vec3::UP);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Create an identity transform: at the origin, facing +Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full model matrix.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    // ============ Position ============

    pub fn position(&self) -> Vec3 {
        self.matrix.column(POSITION)
    }

    /// Overwrite the position in place. Orientation is unaffected.
    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.matrix.set_column(POSITION, position);
        self
    }

    // ============ Basis ============

    pub fn left(&self) -> Vec3 {
        self.matrix.column(LEFT)
    }

    pub fn up(&self) -> Vec3 {
        self.matrix.column(UP)
    }

    pub fn forward(&self) -> Vec3 {
        self.matrix.column(FORWARD)
    }

    // ============ Composition ============

    /// Translate by `delta` in the local frame: `m = m * T(delta)`.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.matrix = self.matrix * Mat4::translation(delta.x, delta.y, delta.z);
        self
    }

    /// Rotate by `angle` radians about a local `axis`: `m = m * R(angle, axis)`.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) -> &mut Self {
        self.matrix = self.matrix * Mat4::rotation(angle, axis);
        self
    }
}

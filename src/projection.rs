//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the camera
//! lens (FOV, aspect ratio, near/far planes) and generates the projection
//! matrix loaded at the start of every frame.

use crate::math::mat4::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(fov_y_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self::new(fov_y_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    /// Returns the vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Returns the aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Returns the near clipping plane distance.
    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    /// Returns the far clipping plane distance.
    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Generates the perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn from_degrees_converts_correctly() {
        let proj = Projection::from_degrees(60.0, 1.0, 0.1, 100.0);
        assert_relative_eq!(proj.fov_y(), FRAC_PI_3, epsilon = 1e-6);
        assert_eq!(proj.aspect_ratio(), 1.0);
        assert_eq!(proj.z_near(), 0.1);
        assert_eq!(proj.z_far(), 100.0);
    }

    #[test]
    fn wider_aspect_shrinks_horizontal_scale() {
        let square = Projection::new(FRAC_PI_3, 1.0, 0.1, 100.0).matrix();
        let wide = Projection::new(FRAC_PI_3, 2.0, 0.1, 100.0).matrix();
        assert_relative_eq!(wide.get(0, 0) * 2.0, square.get(0, 0), epsilon = 1e-6);
        assert_relative_eq!(wide.get(1, 1), square.get(1, 1), epsilon = 1e-6);
    }
}

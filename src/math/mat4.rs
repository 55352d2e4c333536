//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Rotations are counter-clockwise about their axis (right-handed),
//!   and the projection/view builders match `gluPerspective`/`gluLookAt`
//!
//! # Example
//! ```ignore
//! let model = translation * rotation;  // rotation applied first
//! let eye_space = view * model * vertex;
//! ```

use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]` with column-major convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last column (column-major convention).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation of `angle` radians around `axis`.
    ///
    /// Same matrix as `glRotate`. The axis is used as given; a non-unit axis
    /// yields a scaled, non-orthonormal result.
    pub fn rotation(angle: f32, axis: Vec3) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = axis;
        Mat4::new([
            [x * x * t + c, x * y * t - z * s, x * z * t + y * s, 0.0],
            [y * x * t + z * s, y * y * t + c, y * z * t - x * s, 0.0],
            [x * z * t - y * s, y * z * t + x * s, z * z * t + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a perspective projection matrix mapping eye space (camera
    /// looking down -Z) to the `[-1, 1]` clip cube.
    ///
    /// # Arguments
    ///
    /// * `fov_y` - Vertical field of view in radians.
    /// * `aspect_ratio` - Width divided by height.
    /// * `near`, `far` - Positive distances to the clipping planes.
    pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let a = (far + near) / (near - far);
        let b = 2.0 * far * near / (near - far);
        Mat4::new([
            [f / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, a, b],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Creates a view matrix.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `target` - The point the camera is looking at.
    /// * `up` - The up direction of the camera.
    ///
    /// # Returns
    ///
    /// A view matrix that maps `eye` to the origin and `target` onto -Z.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let side = forward.cross(up).normalize();
        let up = side.cross(forward);

        Self::new([
            [side.x, side.y, side.z, -side.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Reads the first three rows of column `col`.
    #[inline]
    pub fn column(&self, col: usize) -> Vec3 {
        Vec3::new(self.data[0][col], self.data[1][col], self.data[2][col])
    }

    /// Overwrites the first three rows of column `col`; row 3 is untouched.
    #[inline]
    pub fn set_column(&mut self, col: usize, v: Vec3) {
        self.data[0][col] = v.x;
        self.data[1][col] = v.y;
        self.data[2][col] = v.z;
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-major convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            self.data[r][0] * v.x
                + self.data[r][1] * v.y
                + self.data[r][2] * v.z
                + self.data[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

/// Transform a point: Mat4 * Vec3 (treats Vec3 as column vector with w=1).
///
/// No perspective division; use `Mat4 * Vec4` for projective transforms.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        (self * Vec4::from(v)).to_vec3()
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn axis_rotation_matches_rotation_x_and_y() {
        assert_relative_eq!(
            Mat4::rotation(0.7, Vec3::RIGHT),
            Mat4::rotation_x(0.7),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            Mat4::rotation(-1.3, Vec3::UP),
            Mat4::rotation_y(-1.3),
            epsilon = 1e-6
        );
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        // Quarter turn about +Y carries +Z onto +X.
        let rotated = Mat4::rotation_y(FRAC_PI_2) * Vec3::FORWARD;
        assert_relative_eq!(rotated, Vec3::RIGHT, epsilon = 1e-6);
    }

    #[test]
    fn translation_lives_in_last_column() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        assert_eq!(m.column(3), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m * Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn set_column_leaves_other_columns_alone() {
        let mut m = Mat4::rotation_y(0.4);
        let before = m;
        m.set_column(3, Vec3::new(5.0, 6.0, 7.0));
        for col in 0..3 {
            assert_eq!(m.column(col), before.column(col));
        }
        assert_eq!(m.get(3, 3), 1.0);
    }

    #[test]
    fn look_at_maps_eye_to_origin_and_target_to_negative_z() {
        let view = Mat4::look_at(Vec3::new(0.0, 2.0, 10.0), Vec3::new(0.0, 2.0, 0.0), Vec3::UP);
        assert_relative_eq!(view * Vec3::new(0.0, 2.0, 10.0), Vec3::ZERO, epsilon = 1e-5);
        assert_relative_eq!(
            view * Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 0.0, -10.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn perspective_maps_near_and_far_to_clip_cube_faces() {
        let proj = Mat4::perspective(60f32.to_radians(), 1.0, 0.1, 100.0);
        let near = (proj * Vec4::point(0.0, 0.0, -0.1)).to_ndc();
        let far = (proj * Vec4::point(0.0, 0.0, -100.0)).to_ndc();
        assert_relative_eq!(near.z, -1.0, epsilon = 1e-4);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-4);
    }
}

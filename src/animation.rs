//! Per-frame animation state.

use crate::math::mat4::Mat4;

/// Degrees added to each angle per frame.
pub const ANGLE_STEP_DEGREES: f32 = 1.0;

/// Spin angles in degrees, advanced once per frame.
///
/// The angles grow without wrapping; they only feed periodic rotations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub angle_x: f32,
    pub angle_y: f32,
}

impl AnimationState {
    pub fn advance(&mut self) {
        self.angle_x += ANGLE_STEP_DEGREES;
        self.angle_y += ANGLE_STEP_DEGREES;
    }

    /// `Rx(angle_x) * Ry(angle_y)`: spin about world y first, then x.
    pub fn spin(&self) -> Mat4 {
        Mat4::rotation_x(self.angle_x.to_radians()) * Mat4::rotation_y(self.angle_y.to_radians())
    }
}

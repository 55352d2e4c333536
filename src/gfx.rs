//! The fixed-function graphics context the scene paints into.
//!
//! [`GraphicsContext`] mirrors an immediate-mode pipeline: two matrix
//! slots (projection and model-view, the latter with a push/pop stack),
//! clear state, a depth-test switch and flat-colored triangle emission.
//! [`crate::render::SoftwareRenderer`] is the implementation used by the
//! demo; anything producing the same picture can stand in for it.

use crate::colors::Color;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// Which buffers [`GraphicsContext::clear`] resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearMask {
    pub color: bool,
    pub depth: bool,
}

impl ClearMask {
    pub const COLOR: Self = Self {
        color: true,
        depth: false,
    };
    pub const DEPTH: Self = Self {
        color: false,
        depth: true,
    };
    pub const ALL: Self = Self {
        color: true,
        depth: true,
    };
}

pub trait GraphicsContext {
    /// Color written by [`GraphicsContext::clear`] with a color mask.
    fn set_clear_color(&mut self, color: Color);

    fn set_depth_test(&mut self, enabled: bool);

    fn clear(&mut self, mask: ClearMask);

    /// Overwrites the projection matrix.
    fn load_projection(&mut self, matrix: Mat4);

    /// Overwrites the model-view matrix.
    fn load_modelview(&mut self, matrix: Mat4);

    /// Right-multiplies into the model-view matrix: `mv = mv * matrix`.
    fn mult_modelview(&mut self, matrix: Mat4);

    /// Saves a copy of the current model-view matrix.
    fn push_modelview(&mut self);

    /// Restores the most recently pushed model-view matrix.
    /// Popping an empty stack leaves the matrix as it is.
    fn pop_modelview(&mut self);

    /// Emits one triangle of object-space vertices in a single color,
    /// transformed by the current projection * model-view.
    fn draw_triangle(&mut self, color: Color, vertices: [Vec3; 3]);

    /// The finished color buffer as ARGB8888 bytes, ready to present.
    fn frame_bytes(&self) -> &[u8];
}

//! Perspective camera.
//!
//! The camera is a [`Transform`] plus a [`Projection`]. It looks along its
//! local forward axis (column 2 of the transform) with its local up axis as
//! the view up. An identity camera sits at the origin looking toward +Z, so
//! the demo turns it half way round to look down -Z.

use crate::gfx::{ClearMask, GraphicsContext};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::projection::Projection;
use crate::transform::Transform;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    transform: Transform,
    projection: Projection,
}

impl Camera {
    pub fn new(projection: Projection) -> Self {
        Self {
            transform: Transform::new(),
            projection,
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    /// The point one unit along the forward axis.
    pub fn target(&self) -> Vec3 {
        self.transform.position() + self.transform.forward()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position(), self.target(), self.transform.up())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Begins the frame from this camera's point of view.
    ///
    /// Clears color and depth, then overwrites both matrix stacks: the
    /// projection with the lens and the model-view with the view matrix.
    /// Shapes painted afterwards compose onto that view.
    pub fn paint<G: GraphicsContext + ?Sized>(&self, ctx: &mut G) {
        ctx.clear(ClearMask::ALL);
        ctx.load_projection(self.projection_matrix());
        ctx.load_modelview(self.view_matrix());
    }
}

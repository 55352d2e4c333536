//! The demo's paintable objects.
//!
//! [`Renderable`] is a closed sum over the two things a frame paints; the
//! [`Scene`] keeps its camera first so the view is installed before any
//! shape composes onto it.

use crate::animation::AnimationState;
use crate::camera::Camera;
use crate::config::DemoConfig;
use crate::gfx::GraphicsContext;
use crate::shape::Shape;

#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    Camera(Camera),
    Shape(Shape),
}

impl Renderable {
    /// Paints this object. Shapes are bracketed by a model-view push/pop so
    /// their model matrices never accumulate across shapes.
    pub fn paint<G: GraphicsContext + ?Sized>(&self, ctx: &mut G) {
        match self {
            Renderable::Camera(camera) => camera.paint(ctx),
            Renderable::Shape(shape) => {
                ctx.push_modelview();
                shape.paint(ctx);
                ctx.pop_modelview();
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    objects: Vec<Renderable>,
}

impl Scene {
    pub fn new(camera: Camera, shapes: impl IntoIterator<Item = Shape>) -> Self {
        let objects = std::iter::once(Renderable::Camera(camera))
            .chain(shapes.into_iter().map(Renderable::Shape))
            .collect();
        Self { objects }
    }

    /// The demo scene: one palette cube sitting on the world origin corner.
    pub fn demo(config: &DemoConfig) -> Self {
        let mut cube = Shape::cube(config.cube_size);
        cube.transform_mut().translate(config.cube_center);
        Self::new(config.camera(), [cube])
    }

    pub fn objects(&self) -> &[Renderable] {
        &self.objects
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.objects.iter().filter_map(|object| match object {
            Renderable::Shape(shape) => Some(shape),
            Renderable::Camera(_) => None,
        })
    }

    /// Paints the camera, applies this frame's spin to the view, then
    /// paints every shape under it.
    pub fn paint<G: GraphicsContext + ?Sized>(&self, ctx: &mut G, animation: &AnimationState) {
        for object in &self.objects {
            object.paint(ctx);
            if let Renderable::Camera(_) = object {
                ctx.mult_modelview(animation.spin());
            }
        }
    }
}

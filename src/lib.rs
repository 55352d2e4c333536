//! A spinning, flat-colored cube drawn through a fixed-function style
//! graphics context.
//!
//! Rendering happens on the CPU ([`render::SoftwareRenderer`]) behind the
//! [`gfx::GraphicsContext`] trait; SDL2 is only used for the window, events
//! and presenting finished frames.
//!
//! # Quick Start
//!
//! ```ignore
//! use tumble::prelude::*;
//!
//! let config = DemoConfig::default();
//! let mut window = Window::create(&config.title, config.width, config.height)?;
//! let mut renderer = SoftwareRenderer::new(config.width, config.height);
//! init_graphics(&mut renderer, config.clear_color);
//! FrameLoop::new(config.frame_pacer()).run(&mut window, &mut renderer, &Scene::demo(&config))?;
//! ```

pub mod animation;
pub mod app;
pub mod camera;
pub mod colors;
pub mod config;
pub mod error;
pub mod gfx;
pub mod logging;
pub mod math;
pub mod projection;
pub mod render;
pub mod scene;
pub mod shape;
pub mod transform;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod clipper;

pub use error::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::animation::AnimationState;
    pub use crate::app::{init_graphics, FrameLoop, FrameReport, LoopState};
    pub use crate::camera::Camera;
    pub use crate::colors::Color;
    pub use crate::config::DemoConfig;
    pub use crate::error::Error;
    pub use crate::gfx::{ClearMask, GraphicsContext};
    pub use crate::logging::{init_logging, LoggingConfig};
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
    pub use crate::projection::Projection;
    pub use crate::render::SoftwareRenderer;
    pub use crate::scene::{Renderable, Scene};
    pub use crate::shape::{Shape, ShapeKind};
    pub use crate::transform::Transform;
    pub use crate::window::{FramePacer, Surface, Window, WindowEvent};
}

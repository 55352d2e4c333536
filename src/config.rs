//! Compile-time demo settings.
//!
//! The demo takes no flags, files or environment variables (apart from
//! `RUST_LOG` for log verbosity); everything it needs lives in
//! [`DemoConfig::default`].

use std::f32::consts::PI;

use crate::camera::Camera;
use crate::colors::{self, Color};
use crate::logging::LoggingConfig;
use crate::math::vec3::Vec3;
use crate::projection::Projection;
use crate::window::FramePacer;

pub const WINDOW_TITLE: &str = "SDL2 Simple Example";
pub const WINDOW_WIDTH: u32 = 512;
pub const WINDOW_HEIGHT: u32 = 512;
pub const FPS: u32 = 60;

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Target frame rate; 0 disables pacing.
    pub fps: u32,
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub clear_color: Color,
    /// Camera position. The camera looks down -Z from here.
    pub eye: Vec3,
    /// Cube half-extent.
    pub cube_size: f32,
    /// Cube center in world space; the cube spins about the world origin.
    pub cube_center: Vec3,
    pub logging: LoggingConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: FPS,
            fov_y_degrees: 60.0,
            z_near: 0.1,
            z_far: 100.0,
            clear_color: colors::BACKGROUND,
            eye: Vec3::new(0.0, 2.0, 10.0),
            cube_size: 0.5,
            cube_center: Vec3::new(0.5, 0.5, 0.5),
            logging: LoggingConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn projection(&self) -> Projection {
        Projection::from_degrees(self.fov_y_degrees, self.aspect_ratio(), self.z_near, self.z_far)
    }

    /// The startup camera: moved to `eye`, then turned half way round so
    /// it looks down -Z.
    pub fn camera(&self) -> Camera {
        let mut camera = Camera::new(self.projection());
        camera.transform_mut().translate(self.eye).rotate(PI, Vec3::UP);
        camera
    }

    pub fn frame_pacer(&self) -> FramePacer {
        FramePacer::from_fps(self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::time::Duration;

    #[test]
    fn default_camera_looks_at_the_origin_plane() {
        let config = DemoConfig::default();
        let camera = config.camera();
        assert_relative_eq!(camera.position(), Vec3::new(0.0, 2.0, 10.0), epsilon = 1e-6);
        assert_relative_eq!(camera.target(), Vec3::new(0.0, 2.0, 9.0), epsilon = 1e-6);
    }

    #[test]
    fn default_pacing_is_sixty_hertz() {
        let pacer = DemoConfig::default().frame_pacer();
        assert_eq!(pacer.target(), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn square_window_has_unit_aspect() {
        assert_eq!(DemoConfig::default().aspect_ratio(), 1.0);
    }
}

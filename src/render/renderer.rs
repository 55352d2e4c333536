//! CPU implementation of the fixed-function [`GraphicsContext`].
//!
//! [`SoftwareRenderer`] owns the color and depth buffers plus the matrix
//! state. Each emitted triangle runs through the classic pipeline:
//!
//! ```text
//! object --(projection * modelview)--> clip --(clip cube)--> clipped polygon
//!        --(divide by w)--> NDC --(viewport)--> window --(edge functions)--> pixels
//! ```

use log::warn;

use super::framebuffer::{FrameBuffer, DEPTH_CLEAR};
use super::rasterizer::{fill_triangle, ScreenTriangle};
use crate::clipper::{ClipSpaceClipper, ClipSpacePolygon};
use crate::colors::{self, Color};
use crate::gfx::{ClearMask, GraphicsContext};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// Clipped vertices this close to `w = 0` are dropped before the divide.
const MIN_CLIP_W: f32 = 1e-6;

pub struct SoftwareRenderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
    clear_color: Color,
    depth_test: bool,
    projection: Mat4,
    modelview: Mat4,
    modelview_stack: Vec<Mat4>,
    clipper: ClipSpaceClipper,
}

impl SoftwareRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND.to_argb(); size],
            depth_buffer: vec![DEPTH_CLEAR; size],
            width,
            height,
            clear_color: colors::BACKGROUND,
            depth_test: false,
            projection: Mat4::identity(),
            modelview: Mat4::identity(),
            modelview_stack: Vec::new(),
            clipper: ClipSpaceClipper::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn modelview(&self) -> Mat4 {
        self.modelview
    }

    pub fn depth_test(&self) -> bool {
        self.depth_test
    }

    /// Color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.width && y < self.height)
            .then(|| Color::from_argb(self.color_buffer[(y * self.width + x) as usize]))
    }

    /// Depth at (x, y), or None if out of bounds.
    pub fn depth(&self, x: u32, y: u32) -> Option<f32> {
        (x < self.width && y < self.height).then(|| self.depth_buffer[(y * self.width + x) as usize])
    }

    /// Maps a clip-space position to window space: pixels with y down and
    /// depth in `[0, 1]`.
    fn to_window(&self, clip: Vec4) -> Vec3 {
        let ndc = clip.to_ndc();
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
            ndc.z * 0.5 + 0.5,
        )
    }
}

impl GraphicsContext for SoftwareRenderer {
    fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.depth_test = enabled;
    }

    fn clear(&mut self, mask: ClearMask) {
        if mask.color {
            self.color_buffer.fill(self.clear_color.to_argb());
        }
        if mask.depth {
            self.depth_buffer.fill(DEPTH_CLEAR);
        }
    }

    fn load_projection(&mut self, matrix: Mat4) {
        self.projection = matrix;
    }

    fn load_modelview(&mut self, matrix: Mat4) {
        self.modelview = matrix;
    }

    fn mult_modelview(&mut self, matrix: Mat4) {
        self.modelview = self.modelview * matrix;
    }

    fn push_modelview(&mut self) {
        self.modelview_stack.push(self.modelview);
    }

    fn pop_modelview(&mut self) {
        match self.modelview_stack.pop() {
            Some(matrix) => self.modelview = matrix,
            None => warn!("model-view stack underflow; pop ignored"),
        }
    }

    fn draw_triangle(&mut self, color: Color, vertices: [Vec3; 3]) {
        let mvp = self.projection * self.modelview;
        let [a, b, c] = vertices.map(|v| mvp * Vec4::from(v));

        let polygon = self
            .clipper
            .clip_polygon(ClipSpacePolygon::from_triangle(a, b, c));
        if polygon.vertices.iter().any(|v| v.w < MIN_CLIP_W) {
            return;
        }

        let screen: Vec<ScreenTriangle> = polygon
            .triangulate()
            .map(|tri| ScreenTriangle::new(tri.map(|v| self.to_window(v)), color.to_argb()))
            .collect();

        let mut fb = FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        );
        for triangle in &screen {
            fill_triangle(triangle, &mut fb, self.depth_test);
        }
    }

    fn frame_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }
}
